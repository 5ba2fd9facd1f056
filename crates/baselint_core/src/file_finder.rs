//! File discovery with include/exclude glob filtering.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;

use crate::ScanError;

/// Expands file patterns into concrete paths, honoring include/exclude
/// globs from the configuration.
#[derive(Debug)]
pub struct FileFinder {
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    /// Builds a finder from include/exclude glob patterns.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, ScanError> {
        let include_globs = Self::build_globset(include)?;
        let exclude_globs = Self::build_globset(exclude)?;

        Ok(Self {
            include_globs,
            exclude_globs,
        })
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ScanError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| ScanError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| ScanError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Checks if a path should be skipped based on include/exclude patterns.
    pub fn should_ignore(&self, path: &Path) -> bool {
        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
        {
            return true;
        }

        if self
            .include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(path))
        {
            return true;
        }

        false
    }

    /// Expands patterns into files to scan.
    ///
    /// A pattern naming an existing file is taken as-is (subject to
    /// exclusion); a pattern naming a directory is walked and filtered by
    /// the include globs; anything else is treated as a glob rooted at
    /// `base_dir`. The result is sorted and deduplicated so scan order is
    /// deterministic.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();
        let mut glob_builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let path = Path::new(pattern);
            if path.is_file() {
                if !self.is_excluded(path) {
                    files.push(path.to_path_buf());
                }
            } else if path.is_dir() {
                self.walk_into(path, &mut files);
            } else {
                let glob = Glob::new(pattern)
                    .map_err(|e| ScanError::config(format!("Invalid glob pattern: {}", e)))?;
                glob_builder.add(glob);
                has_globs = true;
            }
        }

        if has_globs {
            let globset = glob_builder
                .build()
                .map_err(|e| ScanError::config(format!("Failed to build globset: {}", e)))?;

            for entry in WalkDir::new(base_dir).into_iter().filter_map(Result::ok) {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                let relative = path.strip_prefix(base_dir).unwrap_or(path);
                if globset.is_match(relative) && !self.is_excluded(relative) {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        debug!(count = files.len(), "discovered files");
        Ok(files)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
    }

    fn walk_into(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        for entry in WalkDir::new(dir).into_iter().filter_map(Result::ok) {
            if entry.file_type().is_file() && !self.should_ignore(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
    }
}
