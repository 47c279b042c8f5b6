use thiserror::Error;

use crate::model::media::{MediaUri, MediaValidationError};

//
// ─── ITEM TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated quiz item as it arrives from a catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItemDraft {
    pub composer: String,
    pub title: String,
    pub audio: String,
    pub image: String,
    pub trivia: String,
}

impl QuizItemDraft {
    /// Validate the raw fields into an immutable `QuizItem`.
    ///
    /// # Errors
    ///
    /// Returns `ItemError` when composer or title are blank, or when either
    /// media locator cannot be parsed.
    pub fn validate(self) -> Result<QuizItem, ItemError> {
        let composer = self.composer.trim();
        if composer.is_empty() {
            return Err(ItemError::EmptyComposer);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ItemError::EmptyTitle);
        }
        let audio = MediaUri::parse(&self.audio).map_err(ItemError::Audio)?;
        let image = MediaUri::parse(&self.image).map_err(ItemError::Image)?;

        Ok(QuizItem {
            composer: composer.to_owned(),
            title: title.to_owned(),
            audio,
            image,
            trivia: self.trivia.trim().to_owned(),
        })
    }
}

/// One playable quiz question: a clip, the composer who wrote it, and the
/// facts revealed once the answer is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    composer: String,
    title: String,
    audio: MediaUri,
    image: MediaUri,
    trivia: String,
}

impl QuizItem {
    #[must_use]
    pub fn new(
        composer: impl Into<String>,
        title: impl Into<String>,
        audio: MediaUri,
        image: MediaUri,
        trivia: impl Into<String>,
    ) -> Self {
        Self {
            composer: composer.into(),
            title: title.into(),
            audio,
            image,
            trivia: trivia.into(),
        }
    }

    /// The correct answer, also the option label.
    #[must_use]
    pub fn composer(&self) -> &str {
        &self.composer
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn audio(&self) -> &MediaUri {
        &self.audio
    }

    #[must_use]
    pub fn image(&self) -> &MediaUri {
        &self.image
    }

    #[must_use]
    pub fn trivia(&self) -> &str {
        &self.trivia
    }
}

//
// ─── ITEM VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemError {
    #[error("composer cannot be empty")]
    EmptyComposer,

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("invalid audio locator: {0}")]
    Audio(MediaValidationError),

    #[error("invalid image locator: {0}")]
    Image(MediaValidationError),
}
