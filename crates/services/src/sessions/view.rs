use quiz_core::model::{AnswerRecord, HighScoreTable, Tier};
use quiz_core::{Classification, OfferedActions};

/// Presentation-agnostic snapshot of the engine, published after every transition.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The UI owns wording such as "Question 2 of 5" or result messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSnapshot {
    Idle { high_scores: HighScoreTable },
    InProgress(QuestionView),
    Complete(ResultView),
}

/// The question currently awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub tier: Tier,
    pub prompt: String,
    pub choices: Vec<String>,
    /// 1-based position of this question within the tier.
    pub position: usize,
    pub total: usize,
    pub live_percent: u8,
}

/// Outcome of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub tier: Tier,
    pub percent: u8,
    pub classification: Classification,
    pub actions: OfferedActions,
    /// Best percentage for `tier` so far, including this attempt once recorded.
    pub high_score: u8,
    pub mistakes: Vec<MistakeView>,
}

/// A wrong answer, resolved to choice texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MistakeView {
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
}

impl MistakeView {
    #[must_use]
    pub fn from_record(record: &AnswerRecord) -> Self {
        Self {
            prompt: record.question_prompt().to_owned(),
            chosen: record.chosen_text().to_owned(),
            correct: record.correct_text().to_owned(),
        }
    }
}
