//! JSON catalog format for question banks.
//!
//! ```json
//! {
//!   "easy": [{ "question": "...", "choices": ["...", "..."], "correctIndex": 0 }],
//!   "intermediate": [...],
//!   "hard": [...],
//!   "expert": [...]
//! }
//! ```

use std::io::Read;
use std::path::Path;

use quiz_core::model::{Question, Tier, TierTable};
use serde::Deserialize;
use tracing::{debug, info};

use crate::repository::{BankError, InMemoryQuestionBank, QuestionBank};

const BUNDLED_CATALOG: &str = include_str!("../data/questions.json");

/// On-disk shape of a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub easy: Vec<Question>,
    pub intermediate: Vec<Question>,
    pub hard: Vec<Question>,
    pub expert: Vec<Question>,
}

impl Catalog {
    #[must_use]
    pub fn into_table(self) -> TierTable<Vec<Question>> {
        TierTable::new(self.easy, self.intermediate, self.hard, self.expert)
    }
}

impl InMemoryQuestionBank {
    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON or invalid questions and
    /// `BankError::EmptyTier` when a tier has no questions.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Self::from_catalog(catalog)
    }

    /// # Errors
    ///
    /// See [`InMemoryQuestionBank::from_json_str`].
    pub fn from_json_reader(reader: impl Read) -> Result<Self, BankError> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        Self::from_catalog(catalog)
    }

    /// Load a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be opened, otherwise see
    /// [`InMemoryQuestionBank::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading question catalog");
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// The Git catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is broken.
    pub fn bundled() -> Result<Self, BankError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// # Errors
    ///
    /// Returns `BankError::EmptyTier` when a tier has no questions.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, BankError> {
        let bank = Self::new(catalog.into_table())?;
        for tier in Tier::ALL {
            info!(tier = %tier, questions = bank.len(tier), "question set loaded");
        }
        Ok(bank)
    }
}
