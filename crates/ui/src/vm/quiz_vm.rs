use quiz_core::model::Tier;
use services::{AdvanceOutcome, QuizError, QuizLoopService, QuizSnapshot};
use tracing::{debug, warn};

use crate::views::ViewError;
use crate::vm::{ScreenVm, map_home, map_question, map_result};

/// User intents forwarded from the screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    StartTier(Tier),
    Select(usize),
    Next,
    Retry,
    Advance,
    CompleteAll,
    Home,
}

/// One-off messages shown on top of the result screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    AllLevelsComplete,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Notice::AllLevelsComplete => "You have completed all levels!",
        }
    }
}

/// Presentation state wrapped around the quiz loop: the pending choice and any notice.
pub struct QuizVm {
    quiz: QuizLoopService,
    selected: Option<usize>,
    notice: Option<Notice>,
    error: Option<ViewError>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizLoopService) -> Self {
        Self {
            quiz,
            selected: None,
            notice: None,
            error: None,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizLoopService {
        &self.quiz
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.error
    }

    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        match self.quiz.snapshot() {
            QuizSnapshot::Idle { high_scores } => ScreenVm::Home(map_home(&high_scores)),
            QuizSnapshot::InProgress(view) => ScreenVm::Question(map_question(&view, self.selected)),
            QuizSnapshot::Complete(view) => ScreenVm::Result(map_result(&view, self.notice)),
        }
    }

    /// Apply an intent. Rejected intents leave the quiz untouched and set `error`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::NoSelection` for `Next` without a picked choice and
    /// `ViewError::Rejected` when the engine refuses the transition.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        debug!(?intent, "dispatching quiz intent");
        let result = self.apply(intent);
        self.error = result.err();
        result
    }

    fn apply(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        match intent {
            QuizIntent::StartTier(tier) => {
                self.clear_transient();
                self.quiz.start_tier(tier).map_err(rejected)
            }
            QuizIntent::Select(index) => {
                let in_range = match self.quiz.snapshot() {
                    QuizSnapshot::InProgress(view) => index < view.choices.len(),
                    _ => false,
                };
                if !in_range {
                    return Err(ViewError::Rejected);
                }
                self.selected = Some(index);
                Ok(())
            }
            QuizIntent::Next => {
                let index = self.selected.ok_or(ViewError::NoSelection)?;
                self.quiz.submit_answer(index).map_err(rejected)?;
                self.selected = None;
                Ok(())
            }
            QuizIntent::Retry => {
                self.clear_transient();
                self.quiz.retry().map_err(rejected)
            }
            QuizIntent::Advance => match self.quiz.advance().map_err(rejected)? {
                AdvanceOutcome::Started(_) => {
                    self.clear_transient();
                    Ok(())
                }
                AdvanceOutcome::AllLevelsComplete => {
                    self.notice = Some(Notice::AllLevelsComplete);
                    Ok(())
                }
            },
            QuizIntent::CompleteAll => {
                self.clear_transient();
                self.quiz.complete_all();
                Ok(())
            }
            QuizIntent::Home => {
                self.clear_transient();
                self.quiz.return_home();
                Ok(())
            }
        }
    }

    fn clear_transient(&mut self) {
        self.selected = None;
        self.notice = None;
    }
}

fn rejected(err: QuizError) -> ViewError {
    warn!(%err, "quiz rejected intent");
    ViewError::Rejected
}
