use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two choices, got {count}")]
    TooFewChoices { count: usize },

    #[error("choice {index} cannot be empty")]
    EmptyChoice { index: usize },

    #[error("correct index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any choice is blank, fewer than two
    /// choices are given, or `correct_index` does not point at a choice.
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                count: choices.len(),
            });
        }
        if let Some(index) = choices.iter().position(|choice| choice.trim().is_empty()) {
            return Err(QuestionError::EmptyChoice { index });
        }
        if correct_index >= choices.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: choices.len(),
            });
        }

        Ok(Self {
            prompt,
            choices,
            correct_index,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Serialized shape of a question in catalog files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    question: String,
    choices: Vec<String>,
    correct_index: usize,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.question, record.choices, record.correct_index)
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            question: question.prompt,
            choices: question.choices,
            correct_index: question.correct_index,
        }
    }
}
