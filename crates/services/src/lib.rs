#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use error::QuizError;

pub use sessions::{
    AdvanceOutcome, FinalResult, MistakeView, QuestionView, QuizEngine, QuizLoopService,
    QuizPhase, QuizSnapshot, ResultView, SubmitOutcome,
};
