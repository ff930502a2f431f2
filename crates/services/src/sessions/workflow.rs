use std::sync::Arc;

use question_bank::QuestionBank;
use quiz_core::model::{HighScoreTable, Tier};
use tracing::{debug, info};

use super::engine::{QuizEngine, QuizPhase, SubmitOutcome};
use super::view::QuizSnapshot;
use crate::error::QuizError;

/// Result of asking for the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Started(Tier),
    /// The completed tier was the last one. The session is left as it was.
    AllLevelsComplete,
}

/// Pairs the quiz engine with a question bank and drives it from user intents.
///
/// This is the surface the presentation layer talks to. High scores are recorded
/// automatically when an attempt completes.
pub struct QuizLoopService {
    bank: Arc<dyn QuestionBank>,
    engine: QuizEngine,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self::with_high_scores(bank, HighScoreTable::new())
    }

    #[must_use]
    pub fn with_high_scores(bank: Arc<dyn QuestionBank>, high_scores: HighScoreTable) -> Self {
        Self {
            bank,
            engine: QuizEngine::new(high_scores),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.engine.phase()
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreTable {
        self.engine.high_scores()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.engine.snapshot()
    }

    /// Start `tier` with its question set from the bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` if the bank has no questions for `tier`.
    pub fn start_tier(&mut self, tier: Tier) -> Result<(), QuizError> {
        let questions = self.bank.questions(tier).to_vec();
        self.engine.start_tier(tier, questions)
    }

    /// Submit an answer and record the high score if that finished the attempt.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError::InvalidChoice` and `QuizError::NotInProgress`.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<SubmitOutcome, QuizError> {
        let outcome = self.engine.submit_answer(choice_index)?;
        if matches!(outcome, SubmitOutcome::Completed { .. }) {
            self.engine.record_high_score_if_beaten()?;
        }
        Ok(outcome)
    }

    /// Restart the active tier from its first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveTier` while idle.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        self.engine.reset_attempt()
    }

    /// Move on to the next tier after a completed attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotComplete` if the attempt is still running.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        match self.engine.advance_tier(self.bank.as_ref()) {
            Ok(tier) => Ok(AdvanceOutcome::Started(tier)),
            Err(QuizError::NoNextTier { tier }) => {
                info!(%tier, "all levels complete");
                Ok(AdvanceOutcome::AllLevelsComplete)
            }
            Err(err) => Err(err),
        }
    }

    /// Acknowledge finishing every tier and go back to the tier list.
    pub fn complete_all(&mut self) {
        debug!("closing finished run");
        self.engine.return_home();
    }

    /// Abandon whatever is on screen and go back to the tier list.
    pub fn return_home(&mut self) {
        self.engine.return_home();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use question_bank::InMemoryQuestionBank;
    use quiz_core::model::{Question, TierTable};

    fn build_service() -> QuizLoopService {
        let sets = TierTable::from_fn(|tier| {
            (0..2)
                .map(|i| {
                    Question::new(
                        format!("{tier} {i}"),
                        vec!["right".into(), "wrong".into()],
                        0,
                    )
                    .unwrap()
                })
                .collect()
        });
        QuizLoopService::new(Arc::new(InMemoryQuestionBank::new(sets).unwrap()))
    }

    #[test]
    fn completion_records_high_score() {
        let mut svc = build_service();
        svc.start_tier(Tier::Intermediate).unwrap();
        svc.submit_answer(0).unwrap();
        let outcome = svc.submit_answer(1).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Completed {
                correct: false,
                percent: 50
            }
        );
        assert_eq!(svc.high_scores().get(Tier::Intermediate), 50);
    }

    #[test]
    fn advance_walks_every_tier_then_reports_completion() {
        let mut svc = build_service();
        svc.start_tier(Tier::Easy).unwrap();
        assert_eq!(svc.advance().unwrap_err(), QuizError::NotComplete);

        for expected in [Tier::Intermediate, Tier::Hard, Tier::Expert] {
            svc.submit_answer(0).unwrap();
            svc.submit_answer(0).unwrap();
            assert_eq!(svc.advance().unwrap(), AdvanceOutcome::Started(expected));
        }

        svc.submit_answer(0).unwrap();
        svc.submit_answer(0).unwrap();
        assert_eq!(svc.advance().unwrap(), AdvanceOutcome::AllLevelsComplete);
        assert_eq!(svc.phase(), QuizPhase::Complete);

        svc.complete_all();
        assert_eq!(svc.phase(), QuizPhase::Idle);
        for tier in Tier::ALL {
            assert_eq!(svc.high_scores().get(tier), 100);
        }
    }

    #[test]
    fn retry_after_completion_restarts_same_tier() {
        let mut svc = build_service();
        svc.start_tier(Tier::Hard).unwrap();
        svc.submit_answer(1).unwrap();
        svc.submit_answer(1).unwrap();
        svc.retry().unwrap();

        let QuizSnapshot::InProgress(view) = svc.snapshot() else {
            panic!("expected question view");
        };
        assert_eq!(view.tier, Tier::Hard);
        assert_eq!(view.position, 1);
        assert_eq!(view.live_percent, 0);
    }

    #[test]
    fn return_home_from_mid_attempt_does_not_touch_high_scores() {
        let mut svc = build_service();
        svc.start_tier(Tier::Easy).unwrap();
        svc.submit_answer(0).unwrap();
        svc.return_home();

        assert!(matches!(svc.snapshot(), QuizSnapshot::Idle { .. }));
        assert_eq!(svc.high_scores().get(Tier::Easy), 0);
    }
}
