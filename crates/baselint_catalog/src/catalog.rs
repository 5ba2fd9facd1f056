//! Catalog loading and validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{CatalogError, FeatureDescriptor};

/// The curated default catalog bundled with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/baseline.json");

/// An immutable, validated table of feature descriptors.
///
/// Loaded once at startup and frozen; the match engine and all scans share
/// it read-only, so concurrent scans need no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    features: Vec<FeatureDescriptor>,
}

/// On-disk catalog document: a `features` array, matching the upstream
/// Baseline data layout.
#[derive(Deserialize)]
struct CatalogDocument {
    features: Vec<FeatureDescriptor>,
}

impl Catalog {
    /// Builds a catalog from already-parsed descriptors, validating them.
    pub fn new(features: Vec<FeatureDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for feature in &features {
            if feature.match_name.is_empty() {
                return Err(CatalogError::EmptyMatchName {
                    id: feature.id.clone(),
                });
            }
            if !seen.insert(feature.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: feature.id.clone(),
                });
            }
        }
        Ok(Self { features })
    }

    /// Parses and validates a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| CatalogError::parse(format!("Invalid JSON: {}", e)))?;
        Self::new(document.features)
    }

    /// Loads a catalog from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the embedded default catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Iterates features in catalog order.
    ///
    /// Catalog order is meaningful: the match engine uses it to break ties
    /// between occurrences starting at the same offset.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.features.iter()
    }

    /// Looks up a feature by id.
    pub fn get(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Returns the features as a slice, in catalog order.
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// Returns the number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the catalog has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
