//! Diagnostic types: occurrences rendered as findings.

use serde::{Deserialize, Serialize};

use baselint_engine::{Occurrence, Span};

use crate::line_index::Location;

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Feature needs attention before shipping.
    Warning,
    /// Feature is Baseline safe; reported for information.
    #[default]
    Info,
}

/// One finding: a feature occurrence with presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Id of the feature that matched.
    pub feature_id: String,

    /// Human-readable message.
    pub message: String,

    /// Byte span in the source.
    pub span: Span,

    /// Line/column location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// Documentation link, when the catalog has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_link: Option<String>,
}

impl Diagnostic {
    /// Builds a diagnostic from an occurrence.
    ///
    /// Safe features become `Info` with a "Baseline safe" message; unsafe
    /// ones become `Warning` carrying the catalog note (or a stock fallback
    /// when the catalog has none).
    pub fn from_occurrence(occurrence: &Occurrence<'_>) -> Self {
        let feature = occurrence.feature;

        let (severity, message) = if feature.safe {
            (
                Severity::Info,
                format!("`{}` is Baseline safe.", feature.match_name),
            )
        } else {
            let note = feature.note.as_deref().unwrap_or("No note provided.");
            (
                Severity::Warning,
                format!("`{}` is not Baseline safe: {}", feature.match_name, note),
            )
        };

        Self {
            feature_id: feature.id.clone(),
            message,
            span: occurrence.span,
            loc: None,
            severity,
            doc_link: feature.doc_link.clone(),
        }
    }

    /// Sets the line/column location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }
}
