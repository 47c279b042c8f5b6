use std::path::PathBuf;

use quiz_core::model::{Catalog, ItemError, QuizItem, QuizItemDraft};
use thiserror::Error;

/// Errors surfaced by catalog sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("catalog has no items")]
    EmptyCatalog,

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid catalog item #{index}: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ItemError,
    },
}

/// Provides the ordered quiz items once, at startup.
///
/// Sources validate what they read; a catalog they return is ready to play.
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::EmptyCatalog` when no items are available, or
    /// another `StorageError` when reading or validation fails.
    fn load(&self) -> Result<Catalog, StorageError>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Validate drafts in order, reporting the first bad item by position.
///
/// # Errors
///
/// Returns `StorageError::InvalidItem` for the first draft that fails
/// validation, or `StorageError::EmptyCatalog` when `drafts` is empty.
pub fn catalog_from_drafts(
    drafts: impl IntoIterator<Item = QuizItemDraft>,
) -> Result<Catalog, StorageError> {
    let items = drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| StorageError::InvalidItem { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if items.is_empty() {
        return Err(StorageError::EmptyCatalog);
    }
    Ok(Catalog::new(items))
}

/// Simple in-memory source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<QuizItem>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<Catalog, StorageError> {
        if self.items.is_empty() {
            return Err(StorageError::EmptyCatalog);
        }
        Ok(Catalog::new(self.items.clone()))
    }

    fn describe(&self) -> String {
        format!("in-memory ({} items)", self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::MediaUri;

    fn draft(composer: &str) -> QuizItemDraft {
        QuizItemDraft {
            composer: composer.into(),
            title: "Title".into(),
            audio: "clip.mp3".into(),
            image: "face.jpg".into(),
            trivia: "Fact".into(),
        }
    }

    #[test]
    fn drafts_become_catalog_in_order() {
        let catalog = catalog_from_drafts(vec![draft("A"), draft("B")]).unwrap();
        let composers: Vec<_> = catalog.items().iter().map(QuizItem::composer).collect();
        assert_eq!(composers, vec!["A", "B"]);
    }

    #[test]
    fn invalid_draft_reports_its_position() {
        let err = catalog_from_drafts(vec![draft("A"), draft("")]).unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidItem {
                index: 1,
                source: ItemError::EmptyComposer
            }
        ));
    }

    #[test]
    fn empty_sources_are_rejected() {
        assert!(matches!(
            catalog_from_drafts(Vec::new()),
            Err(StorageError::EmptyCatalog)
        ));
        assert!(matches!(
            InMemoryCatalog::default().load(),
            Err(StorageError::EmptyCatalog)
        ));
    }

    #[test]
    fn in_memory_source_returns_its_items() {
        let item = QuizItem::new(
            "Bach",
            "Air",
            MediaUri::parse("air.mp3").unwrap(),
            MediaUri::parse("bach.jpg").unwrap(),
            "",
        );
        let source = InMemoryCatalog::new(vec![item.clone()]);
        let catalog = source.load().unwrap();
        assert_eq!(catalog.items(), &[item]);
        assert_eq!(source.describe(), "in-memory (1 items)");
    }
}
