#![forbid(unsafe_code)]

pub mod builtin;
pub mod json;
pub mod repository;

pub use builtin::BuiltinCatalog;
pub use json::{CatalogRecord, JsonCatalog, catalog_to_json, parse_catalog};
pub use repository::{CatalogSource, InMemoryCatalog, StorageError, catalog_from_drafts};
