//! Feature descriptor schema.

use serde::{Deserialize, Serialize};

use crate::BrowserSupport;

/// Static metadata describing one detectable web-platform feature.
///
/// Field names in the JSON catalog follow the upstream Baseline data
/// (`matchName`, `browserSupport`, `docLink`). Unrecognized fields are
/// ignored so newer catalog files keep loading on older binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Unique feature identifier, e.g. `"css-gap"`.
    pub id: String,

    /// Category tag selecting the matching strategy (`"api"`, `"css"`, ...).
    ///
    /// Unknown categories fall back to whole-token matching, so new tags
    /// never break scanning.
    pub category: String,

    /// Literal text to search for. Never interpreted as a pattern.
    ///
    /// May be a simple identifier (`fetch`) or a dotted path (`Array.flat`).
    /// Must be non-empty; the catalog loader rejects empty names.
    #[serde(rename = "matchName")]
    pub match_name: String,

    /// True if the feature is Baseline safe (broadly supported).
    pub safe: bool,

    /// Caveat shown when `safe` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// First-supported version per browser, in catalog order.
    #[serde(
        rename = "browserSupport",
        default,
        skip_serializing_if = "BrowserSupport::is_empty"
    )]
    pub browser_support: BrowserSupport,

    /// Link to external documentation (usually MDN).
    #[serde(rename = "docLink", default, skip_serializing_if = "Option::is_none")]
    pub doc_link: Option<String>,
}
