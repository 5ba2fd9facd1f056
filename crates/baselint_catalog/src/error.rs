//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or does not match the schema.
    #[error("Invalid catalog: {0}")]
    Parse(String),

    /// A feature has an empty `matchName`.
    #[error("Feature `{id}` has an empty matchName")]
    EmptyMatchName {
        /// The offending feature id.
        id: String,
    },

    /// Two features share the same id.
    #[error("Duplicate feature id `{id}`")]
    DuplicateId {
        /// The repeated feature id.
        id: String,
    },

    /// I/O error reading a catalog file.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
