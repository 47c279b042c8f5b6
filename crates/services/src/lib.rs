#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_loop;

pub use error::QuizServiceError;
pub use quiz_loop::{QuizLoopService, RngMode};
