//! Scanner error types.

use thiserror::Error;

/// Errors that can occur while configuring or running the scanner.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading or validation error.
    #[error("Catalog error: {0}")]
    Catalog(#[from] baselint_catalog::CatalogError),

    /// Engine build error.
    #[error("Engine error: {0}")]
    Engine(#[from] baselint_engine::EngineError),

    /// File error with path context.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
