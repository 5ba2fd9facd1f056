//! Engine error types.

use thiserror::Error;

/// Errors that can occur while building the match engine.
///
/// Scanning itself never fails; the only fallible step is compiling a
/// feature's pattern, which happens once per feature at engine build time.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A feature's pattern failed to compile.
    ///
    /// Match names are escaped before compilation, so this only happens in
    /// pathological cases (e.g. a name large enough to exceed the regex
    /// compile-size limit).
    #[error("Failed to compile pattern for feature `{id}`: {source}")]
    Pattern {
        /// The feature whose pattern failed.
        id: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}
