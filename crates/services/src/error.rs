//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted while bootstrapping the quiz services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("failed to load catalog from {origin}: {source}")]
    Catalog {
        origin: String,
        #[source]
        source: StorageError,
    },
}
