//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::Tier;

/// Errors emitted by the quiz engine.
///
/// Every rejected call leaves the session exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("choice {index} is out of range for {len} choices")]
    InvalidChoice { index: usize, len: usize },
    #[error("no question is awaiting an answer")]
    NotInProgress,
    #[error("the attempt is not complete yet")]
    NotComplete,
    #[error("no tier is active")]
    NoActiveTier,
    #[error("{tier} is the last tier")]
    NoNextTier { tier: Tier },
    #[error("tier {tier} has no questions")]
    EmptyQuestionSet { tier: Tier },
}

impl QuizError {
    /// True for rejected submissions: a bad index or no question awaiting an answer.
    #[must_use]
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, Self::InvalidChoice { .. } | Self::NotInProgress)
    }
}
