//! Insertion-ordered browser support map.
//!
//! Catalog files list browsers in a deliberate order (typically Chrome,
//! Edge, Firefox, Safari) and consumers display them in that order. A plain
//! `HashMap` would scramble it, so support entries are kept as a vector of
//! pairs and deserialized through a map visitor, which sees keys in
//! document order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-browser "first supported version" strings, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserSupport {
    entries: Vec<(String, String)>,
}

impl BrowserSupport {
    /// Creates an empty support map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a browser entry, keeping insertion order.
    pub fn insert(&mut self, browser: impl Into<String>, version: impl Into<String>) {
        self.entries.push((browser.into(), version.into()));
    }

    /// Looks up the first-supported version for a browser.
    pub fn get(&self, browser: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == browser)
            .map(|(_, version)| version.as_str())
    }

    /// Iterates entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    /// Returns the number of browsers listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no browsers are listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BrowserSupport {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Serialize for BrowserSupport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (browser, version) in &self.entries {
            map.serialize_entry(browser, version)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BrowserSupport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SupportVisitor;

        impl<'de> Visitor<'de> for SupportVisitor {
            type Value = BrowserSupport;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of browser name to version string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((browser, version)) = map.next_entry::<String, String>()? {
                    entries.push((browser, version));
                }
                Ok(BrowserSupport { entries })
            }
        }

        deserializer.deserialize_map(SupportVisitor)
    }
}
