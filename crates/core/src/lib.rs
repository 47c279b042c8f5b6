#![forbid(unsafe_code)]

pub mod game;
pub mod model;
pub mod pool;

pub use game::{AnswerFeedback, GameAction, GamePhase, GameSession, ScoreLine};
pub use pool::Draw;
