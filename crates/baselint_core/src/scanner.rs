//! The scanner: catalog + engine + file discovery, wired together.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use baselint_catalog::Catalog;
use baselint_engine::MatchEngine;

use crate::file_finder::FileFinder;
use crate::line_index::LineIndex;
use crate::{Diagnostic, ScanConfig, ScanError, ScanResult};

/// Result type for multi-file scans: successful results plus per-file
/// failures (path and error). A file that fails to read never aborts the
/// whole run.
pub type ScanFilesResult = Result<(Vec<ScanResult>, Vec<(PathBuf, ScanError)>), ScanError>;

/// The scanner orchestrator.
///
/// Loads the catalog once, compiles the match engine once, and reuses both
/// for every file. Immutable after construction, so files can be scanned in
/// parallel.
pub struct Scanner {
    config: ScanConfig,
    catalog: Catalog,
    engine: MatchEngine,
    finder: FileFinder,
}

impl Scanner {
    /// Creates a scanner from a configuration.
    ///
    /// Loads the configured catalog (or the embedded default), validates
    /// it, and compiles all matchers up front.
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let catalog = match config.catalog_path() {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Catalog::from_file(&path)?
            }
            None => Catalog::embedded()?,
        };

        debug!(features = catalog.len(), "catalog loaded");

        let engine = MatchEngine::new(&catalog)?;
        let finder = FileFinder::new(&config.include, &config.exclude)?;

        Ok(Self {
            config,
            catalog,
            engine,
            finder,
        })
    }

    /// The catalog this scanner was built with.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scans a text snapshot and returns diagnostics in offset order.
    pub fn scan_text(&self, text: &str) -> Vec<Diagnostic> {
        let index = LineIndex::new(text);

        self.engine
            .scan(text)
            .iter()
            .map(|occurrence| {
                Diagnostic::from_occurrence(occurrence)
                    .with_location(index.location(occurrence.span))
            })
            .collect()
    }

    /// Scans one file.
    pub fn scan_file(&self, path: &Path) -> Result<ScanResult, ScanError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScanError::file(format!("{}: {}", path.display(), e)))?;

        let diagnostics = self.scan_text(&text);
        debug!(path = %path.display(), count = diagnostics.len(), "scanned file");

        Ok(ScanResult::new(path, diagnostics))
    }

    /// Expands patterns and scans every matching file, in parallel.
    ///
    /// Results come back in path order regardless of which thread scanned
    /// what.
    pub fn scan_patterns(&self, patterns: &[String]) -> ScanFilesResult {
        let base_dir = self
            .config
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let files = self.finder.discover_files(patterns, &base_dir)?;
        info!("Scanning {} files", files.len());

        let outcomes: Vec<_> = files
            .par_iter()
            .map(|path| (path.clone(), self.scan_file(path)))
            .collect();

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(error) => {
                    warn!("Failed to scan {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((results, failures))
    }
}
