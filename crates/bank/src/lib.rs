#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;

pub use catalog::Catalog;
pub use repository::{BankError, InMemoryQuestionBank, QuestionBank};
