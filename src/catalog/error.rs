//! Catalog loading errors.

use thiserror::Error;

/// Errors that can occur while loading or validating the reference catalog.
///
/// These are the only hard failures in the crate: once a [`ReferenceData`]
/// has been built, scoring never fails.
///
/// [`ReferenceData`]: super::ReferenceData
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two questions share the same id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// Two parties share the same id.
    #[error("Duplicate party id: {0}")]
    DuplicateParty(String),

    /// A question has no options to choose from.
    #[error("Question {0} has no options")]
    EmptyOptions(String),

    /// The file extension is not one of `json`, `yaml`, `yml`.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}
