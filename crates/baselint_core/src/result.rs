//! Per-file scan results.

use std::path::PathBuf;

use serde::Serialize;

use crate::Diagnostic;
use crate::diagnostic::Severity;

/// The outcome of scanning one file.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// The file that was scanned.
    pub path: PathBuf,

    /// Diagnostics in start-offset order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// Creates a result.
    pub fn new(path: impl Into<PathBuf>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path: path.into(),
            diagnostics,
        }
    }

    /// Returns true if any diagnostic is a warning (non-Baseline feature).
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}
