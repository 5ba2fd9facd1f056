//! # baselint_core
//!
//! Scanner orchestration for baselint.
//!
//! This crate provides:
//! - The main `Scanner` orchestrator (catalog + match engine + files)
//! - Configuration loading and discovery
//! - File discovery and filtering
//! - Diagnostic construction and offset→line/column mapping
//!
//! ## Example
//!
//! ```rust,ignore
//! use baselint_core::{ScanConfig, Scanner};
//!
//! let config = ScanConfig::from_file(".baselint.json")?;
//! let scanner = Scanner::new(config)?;
//!
//! let (results, failures) = scanner.scan_patterns(&["src/**/*.ts".into()])?;
//! for result in results {
//!     println!("{}: {} findings", result.path.display(), result.diagnostics.len());
//! }
//! ```

mod config;
mod diagnostic;
mod error;
mod file_finder;
mod line_index;
mod result;
mod scanner;

pub use config::{DEFAULT_INCLUDE, ScanConfig};
pub use diagnostic::{Diagnostic, Severity};
pub use error::ScanError;
pub use file_finder::FileFinder;
pub use line_index::{LineIndex, Location, Position};
pub use result::ScanResult;
pub use scanner::{ScanFilesResult, Scanner};
