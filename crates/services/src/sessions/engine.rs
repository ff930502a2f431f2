use std::fmt;

use question_bank::QuestionBank;
use quiz_core::model::{AnswerRecord, HighScoreTable, Question, Tier};
use quiz_core::{Classification, OfferedActions, classify, offered_actions, percent_of};
use tracing::{debug, info};

use super::view::{MistakeView, QuestionView, QuizSnapshot, ResultView};
use crate::error::QuizError;

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Where the engine currently sits in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    InProgress,
    Complete,
}

/// Result of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt moved on to the next question.
    Continue { correct: bool },
    /// That was the last question.
    Completed { correct: bool, percent: u8 },
}

impl SubmitOutcome {
    #[must_use]
    pub fn was_correct(self) -> bool {
        match self {
            SubmitOutcome::Continue { correct } | SubmitOutcome::Completed { correct, .. } => {
                correct
            }
        }
    }
}

/// Final outcome of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalResult {
    pub tier: Tier,
    pub percent: u8,
    pub classification: Classification,
    pub actions: OfferedActions,
    /// Wrong answers, in the order they were given.
    pub mistakes: Vec<AnswerRecord>,
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

struct Attempt {
    tier: Tier,
    questions: Vec<Question>,
    index: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
}

impl Attempt {
    fn new(tier: Tier, questions: Vec<Question>) -> Self {
        Self {
            tier,
            questions,
            index: 0,
            score: 0,
            answers: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.answers.clear();
    }

    fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    fn percent(&self) -> u8 {
        percent_of(self.score, self.questions.len())
    }

    fn current_question(&self) -> Option<&Question> {
        if self.is_complete() {
            None
        } else {
            self.questions.get(self.index)
        }
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Quiz session state machine: `Idle → InProgress → Complete`.
///
/// Owns the single active attempt and the process-wide high score table. The table
/// is injected at construction so callers decide its lifetime.
#[derive(Default)]
pub struct QuizEngine {
    attempt: Option<Attempt>,
    high_scores: HighScoreTable,
}

impl QuizEngine {
    #[must_use]
    pub fn new(high_scores: HighScoreTable) -> Self {
        Self {
            attempt: None,
            high_scores,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match &self.attempt {
            None => QuizPhase::Idle,
            Some(attempt) if attempt.is_complete() => QuizPhase::Complete,
            Some(_) => QuizPhase::InProgress,
        }
    }

    #[must_use]
    pub fn active_tier(&self) -> Option<Tier> {
        self.attempt.as_ref().map(|attempt| attempt.tier)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        self.attempt
            .as_ref()
            .map_or(&[][..], |attempt| attempt.questions.as_slice())
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.attempt.as_ref().map_or(0, |attempt| attempt.index)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.attempt.as_ref().map_or(0, |attempt| attempt.score)
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        self.attempt
            .as_ref()
            .map_or(&[][..], |attempt| attempt.answers.as_slice())
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.attempt.as_ref().and_then(Attempt::current_question)
    }

    /// Begin a fresh attempt at `tier`, discarding any current attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` if `questions` is empty.
    pub fn start_tier(&mut self, tier: Tier, questions: Vec<Question>) -> Result<(), QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet { tier });
        }
        debug!(%tier, questions = questions.len(), "starting tier");
        self.attempt = Some(Attempt::new(tier, questions));
        Ok(())
    }

    /// Grade `choice_index` against the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` when no question is awaiting an answer and
    /// `QuizError::InvalidChoice` when the index is out of range.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<SubmitOutcome, QuizError> {
        let attempt = self.attempt.as_mut().ok_or(QuizError::NotInProgress)?;
        let question = attempt.current_question().ok_or(QuizError::NotInProgress)?;
        let len = question.choices().len();
        if choice_index >= len {
            return Err(QuizError::InvalidChoice {
                index: choice_index,
                len,
            });
        }

        let record = AnswerRecord::grade(question, choice_index);
        let correct = record.is_correct();
        if correct {
            attempt.score += 1;
        }
        attempt.answers.push(record);

        if attempt.is_complete() {
            let percent = attempt.percent();
            info!(
                tier = %attempt.tier,
                score = attempt.score,
                total = attempt.questions.len(),
                percent,
                "tier attempt complete"
            );
            return Ok(SubmitOutcome::Completed { correct, percent });
        }

        attempt.index += 1;
        debug!(
            tier = %attempt.tier,
            index = attempt.index,
            correct,
            "advanced to next question"
        );
        Ok(SubmitOutcome::Continue { correct })
    }

    /// Running percentage over the tier's total question count.
    ///
    /// Returns `None` while idle.
    #[must_use]
    pub fn live_score_percent(&self) -> Option<u8> {
        self.attempt.as_ref().map(Attempt::percent)
    }

    /// # Errors
    ///
    /// Returns `QuizError::NotComplete` unless every question has been answered.
    pub fn final_result(&self) -> Result<FinalResult, QuizError> {
        let attempt = self.completed_attempt()?;
        let percent = attempt.percent();
        let classification = classify(attempt.tier, percent);
        Ok(FinalResult {
            tier: attempt.tier,
            percent,
            classification,
            actions: offered_actions(attempt.tier, classification),
            mistakes: attempt
                .answers
                .iter()
                .filter(|answer| !answer.is_correct())
                .cloned()
                .collect(),
        })
    }

    /// Restart the current tier from its first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveTier` while idle.
    pub fn reset_attempt(&mut self) -> Result<(), QuizError> {
        let attempt = self.attempt.as_mut().ok_or(QuizError::NoActiveTier)?;
        attempt.reset();
        debug!(tier = %attempt.tier, "attempt reset");
        Ok(())
    }

    /// Start the tier after the completed one, pulling its questions from `bank`.
    ///
    /// Returns the tier that was started.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotComplete` unless the attempt is complete,
    /// `QuizError::NoNextTier` from the final tier, and
    /// `QuizError::EmptyQuestionSet` if the bank has nothing for the next tier.
    pub fn advance_tier(&mut self, bank: &dyn QuestionBank) -> Result<Tier, QuizError> {
        let tier = self.completed_attempt()?.tier;
        let next = tier.next().ok_or(QuizError::NoNextTier { tier })?;
        self.start_tier(next, bank.questions(next).to_vec())?;
        Ok(next)
    }

    /// Store the completed attempt's percentage if it beats the tier's best.
    ///
    /// Returns `true` when the table changed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotComplete` unless the attempt is complete.
    pub fn record_high_score_if_beaten(&mut self) -> Result<bool, QuizError> {
        let attempt = self
            .attempt
            .as_ref()
            .filter(|attempt| attempt.is_complete())
            .ok_or(QuizError::NotComplete)?;
        let (tier, percent) = (attempt.tier, attempt.percent());
        let beaten = self.high_scores.record(tier, percent);
        if beaten {
            info!(%tier, percent, "new high score");
        }
        Ok(beaten)
    }

    /// Drop the current attempt and go back to `Idle`. High scores are kept.
    pub fn return_home(&mut self) {
        if let Some(attempt) = self.attempt.take() {
            debug!(tier = %attempt.tier, answered = attempt.answers.len(), "returned home");
        }
    }

    /// Read-only picture of the current state for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let Some(attempt) = self.attempt.as_ref() else {
            return QuizSnapshot::Idle {
                high_scores: self.high_scores.clone(),
            };
        };

        if let Some(question) = attempt.current_question() {
            return QuizSnapshot::InProgress(QuestionView {
                tier: attempt.tier,
                prompt: question.prompt().to_owned(),
                choices: question.choices().to_vec(),
                position: attempt.index + 1,
                total: attempt.questions.len(),
                live_percent: attempt.percent(),
            });
        }

        match self.final_result() {
            Ok(result) => QuizSnapshot::Complete(ResultView {
                tier: result.tier,
                percent: result.percent,
                classification: result.classification,
                actions: result.actions,
                high_score: self.high_scores.get(result.tier),
                mistakes: result.mistakes.iter().map(MistakeView::from_record).collect(),
            }),
            Err(_) => QuizSnapshot::Idle {
                high_scores: self.high_scores.clone(),
            },
        }
    }

    fn completed_attempt(&self) -> Result<&Attempt, QuizError> {
        self.attempt
            .as_ref()
            .filter(|attempt| attempt.is_complete())
            .ok_or(QuizError::NotComplete)
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("phase", &self.phase())
            .field("tier", &self.active_tier())
            .field("question_index", &self.question_index())
            .field("score", &self.score())
            .field("answers_len", &self.answers().len())
            .field("high_scores", &self.high_scores)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
