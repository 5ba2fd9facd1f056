//! Occurrence type: one located instance of a feature in scanned text.

use baselint_catalog::FeatureDescriptor;
use serde::Serialize;

use crate::Span;

/// One textual occurrence of a feature.
///
/// Occurrences are produced fresh on every scan and carry no identity
/// across scans; they borrow the descriptor they came from and the text
/// they were found in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Occurrence<'a> {
    /// The feature this occurrence belongs to.
    pub feature: &'a FeatureDescriptor,

    /// Byte range of the match in the scanned text.
    pub span: Span,

    /// The literal substring that matched.
    ///
    /// Equal to `matchName` for the strategies in use today, but reported
    /// from the text so non-literal strategies stay possible.
    pub matched: &'a str,
}

impl<'a> Occurrence<'a> {
    /// Byte offset where the match begins.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns true if the matched span is empty (never, for a validated
    /// catalog).
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
