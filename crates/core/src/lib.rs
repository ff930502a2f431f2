#![forbid(unsafe_code)]

pub mod grading;
pub mod model;

pub use grading::{Classification, OfferedActions, classify, offered_actions, percent_of};
