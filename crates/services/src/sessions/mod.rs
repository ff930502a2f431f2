mod engine;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::{FinalResult, QuizEngine, QuizPhase, SubmitOutcome};
pub use view::{MistakeView, QuestionView, QuizSnapshot, ResultView};
pub use workflow::{AdvanceOutcome, QuizLoopService};
