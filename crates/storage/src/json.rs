use std::path::PathBuf;

use quiz_core::model::{Catalog, QuizItem, QuizItemDraft};
use serde::{Deserialize, Serialize};

use crate::repository::{CatalogSource, StorageError, catalog_from_drafts};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// On-disk shape of one catalog entry.
///
/// The `music_link`, `image_link` and `fun_fact` aliases accept catalogs
/// exported from the earlier web version of the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub composer: String,
    pub title: String,
    #[serde(alias = "music_link")]
    pub audio: String,
    #[serde(alias = "image_link")]
    pub image: String,
    #[serde(default, alias = "fun_fact")]
    pub trivia: String,
}

impl CatalogRecord {
    #[must_use]
    pub fn from_item(item: &QuizItem) -> Self {
        Self {
            composer: item.composer().to_owned(),
            title: item.title().to_owned(),
            audio: item.audio().to_src(),
            image: item.image().to_src(),
            trivia: item.trivia().to_owned(),
        }
    }

    #[must_use]
    pub fn into_draft(self) -> QuizItemDraft {
        QuizItemDraft {
            composer: self.composer,
            title: self.title,
            audio: self.audio,
            image: self.image,
            trivia: self.trivia,
        }
    }
}

/// Parse a JSON array of catalog records.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, or the
/// validation errors of `catalog_from_drafts`.
pub fn parse_catalog(json: &str) -> Result<Catalog, StorageError> {
    let records: Vec<CatalogRecord> = serde_json::from_str(json).map_err(ser)?;
    catalog_from_drafts(records.into_iter().map(CatalogRecord::into_draft))
}

/// Serialize a catalog as pretty-printed JSON records.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn catalog_to_json(catalog: &Catalog) -> Result<String, StorageError> {
    let records: Vec<CatalogRecord> = catalog.items().iter().map(CatalogRecord::from_item).collect();
    serde_json::to_string_pretty(&records).map_err(ser)
}

#[derive(Debug, Clone)]
enum JsonOrigin {
    File(PathBuf),
    Inline(String),
}

/// Catalog read from JSON, either a file on disk or an in-memory document.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    origin: JsonOrigin,
}

impl JsonCatalog {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: JsonOrigin::File(path.into()),
        }
    }

    #[must_use]
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            origin: JsonOrigin::Inline(json.into()),
        }
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Catalog, StorageError> {
        match &self.origin {
            JsonOrigin::File(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_catalog(&raw)
            }
            JsonOrigin::Inline(raw) => parse_catalog(raw),
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            JsonOrigin::File(path) => format!("json file {}", path.display()),
            JsonOrigin::Inline(_) => "inline json".to_string(),
        }
    }
}
