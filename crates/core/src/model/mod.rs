mod catalog;
mod ids;
mod item;
mod media;

pub use catalog::{Catalog, ComposerOption};
pub use ids::ItemId;
pub use item::{ItemError, QuizItem, QuizItemDraft};
pub use media::{MediaUri, MediaValidationError};
