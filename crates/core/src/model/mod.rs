mod answer;
mod high_score;
mod question;
mod tier;

pub use answer::AnswerRecord;
pub use high_score::HighScoreTable;
pub use question::{Question, QuestionError};
pub use tier::{ParseTierError, Tier, TierTable};
