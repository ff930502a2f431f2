use std::sync::Arc;

use quiz_core::model::{Question, Tier, TierTable};
use thiserror::Error;

/// Errors surfaced while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("tier {0} has no questions")]
    EmptyTier(Tier),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only source of questions, one ordered set per tier.
pub trait QuestionBank: Send + Sync {
    /// Questions for `tier`, in presentation order. Never empty.
    fn questions(&self, tier: Tier) -> &[Question];

    /// Number of questions in `tier`.
    fn len(&self, tier: Tier) -> usize {
        self.questions(tier).len()
    }
}

/// Question bank held entirely in memory, loaded once at startup.
#[derive(Debug, Clone)]
pub struct InMemoryQuestionBank {
    sets: TierTable<Vec<Question>>,
}

impl InMemoryQuestionBank {
    /// Build a bank from one question set per tier.
    ///
    /// # Errors
    ///
    /// Returns `BankError::EmptyTier` for the first tier with no questions.
    pub fn new(sets: TierTable<Vec<Question>>) -> Result<Self, BankError> {
        if let Some((tier, _)) = sets.iter().find(|(_, questions)| questions.is_empty()) {
            return Err(BankError::EmptyTier(tier));
        }
        Ok(Self { sets })
    }
}

impl QuestionBank for InMemoryQuestionBank {
    fn questions(&self, tier: Tier) -> &[Question] {
        self.sets.get(tier)
    }
}
