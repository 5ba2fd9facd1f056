//! Scanner configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ScanError;

/// Include patterns used when a config file lists none.
///
/// Mirrors the set of languages Baseline data speaks about: JS/TS sources,
/// stylesheets, and HTML.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "**/*.js",
    "**/*.jsx",
    "**/*.ts",
    "**/*.tsx",
    "**/*.css",
    "**/*.scss",
    "**/*.less",
    "**/*.html",
];

/// Configuration for the scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path to a catalog file. Omitted means the embedded default catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// File patterns to include.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Base directory for resolving relative paths (catalog, patterns).
    /// Usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_include() -> Vec<String> {
    DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect()
}

impl ScanConfig {
    /// Config file names, in discovery order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".baselint.json", ".baselint.jsonc"];

    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self {
            catalog: None,
            include: default_include(),
            exclude: Vec::new(),
            base_dir: None,
        }
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.baselint.json` and `.baselint.jsonc`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ScanError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON (or JSONC) string.
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| ScanError::config(format!("Invalid JSON: {}", e)))?
            .ok_or_else(|| ScanError::config("Empty config file"))?;

        serde_json::from_value(value)
            .map_err(|e| ScanError::config(format!("Invalid config: {}", e)))
    }

    /// Searches `start_dir` and its ancestors for a config file.
    pub fn discover(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
        let start = start_dir.as_ref();
        for dir in start.ancestors() {
            for name in Self::CONFIG_FILES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Resolves the catalog path against `base_dir` if both are relative.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.as_ref()?;
        if path.is_relative()
            && let Some(base) = &self.base_dir
        {
            return Some(base.join(path));
        }
        Some(path.clone())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
