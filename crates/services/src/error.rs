//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while loading `ApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Curriculum or lesson retrieval failure.
///
/// Every variant means the whole request failed; there are no partial
/// results. Callers present a user-facing retry affordance instead of
/// propagating further.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("curriculum service returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Tutor request failure.
///
/// Callers substitute a generic fallback message for display rather than
/// surfacing the raw error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RelayError {
    #[error("a question or an image is required")]
    EmptyPrompt,
    #[error("tutor service returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("tutor returned an empty reply")]
    EmptyReply,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProgressService` when persisting a toggle.
///
/// Note that *reads* never produce this: malformed or unreadable persisted
/// progress is absorbed into an empty set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
