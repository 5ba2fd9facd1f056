//! The match engine: compiled catalog + multi-feature merge.

use baselint_catalog::{Catalog, FeatureDescriptor};

use crate::{EngineError, FeatureMatcher, Occurrence};

/// A catalog compiled for scanning.
///
/// Matchers are compiled once per feature at build time and reused for
/// every scan, so scanning itself is infallible and allocation-free apart
/// from the result list. The engine is immutable after construction;
/// concurrent scans from multiple threads need no locking.
#[derive(Debug)]
pub struct MatchEngine {
    features: Vec<FeatureDescriptor>,
    matchers: Vec<FeatureMatcher>,
}

impl MatchEngine {
    /// Compiles an engine from a catalog.
    pub fn new(catalog: &Catalog) -> Result<Self, EngineError> {
        Self::from_features(catalog.features().to_vec())
    }

    /// Compiles an engine from a list of descriptors.
    ///
    /// Feature order is preserved: it decides the tie-break between
    /// occurrences starting at the same offset.
    pub fn from_features(features: Vec<FeatureDescriptor>) -> Result<Self, EngineError> {
        let matchers = features
            .iter()
            .map(FeatureMatcher::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { features, matchers })
    }

    /// The features this engine scans for, in catalog order.
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// Scans `text` and returns every occurrence of every feature, ordered
    /// by start offset.
    ///
    /// Per-feature occurrence lists are concatenated in catalog order and
    /// then stable-sorted, so two features matching at the same offset come
    /// out in catalog order. Overlapping or identical spans from distinct
    /// features are all reported; deciding how to render overlaps is the
    /// consumer's job.
    ///
    /// Empty text or an empty catalog yield an empty list. Identical inputs
    /// always yield identical output; nothing is cached between scans.
    pub fn scan<'a>(&'a self, text: &'a str) -> Vec<Occurrence<'a>> {
        let mut occurrences = Vec::new();

        for (feature, matcher) in self.features.iter().zip(&self.matchers) {
            for (span, matched) in matcher.find_spans(text) {
                occurrences.push(Occurrence {
                    feature,
                    span,
                    matched,
                });
            }
        }

        // Stable sort: catalog order survives as the tie-break.
        occurrences.sort_by_key(|occurrence| occurrence.span.start);
        occurrences
    }
}

/// Scans `text` against `features` in one call, compiling matchers on the
/// fly.
///
/// Convenience for one-off scans; build a [`MatchEngine`] when scanning
/// repeatedly against the same catalog.
pub fn find_feature_matches<'a>(
    text: &'a str,
    catalog: &'a Catalog,
) -> Result<Vec<Occurrence<'a>>, EngineError> {
    let mut occurrences = Vec::new();

    for feature in catalog.iter() {
        let matcher = FeatureMatcher::compile(feature)?;
        for (span, matched) in matcher.find_spans(text) {
            occurrences.push(Occurrence {
                feature,
                span,
                matched,
            });
        }
    }

    occurrences.sort_by_key(|occurrence| occurrence.span.start);
    Ok(occurrences)
}
