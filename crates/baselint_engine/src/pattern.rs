//! Pattern compilation: one matcher per feature descriptor.
//!
//! Each feature's `matchName` is escaped and compiled into a regex, so the
//! name is always searched as literal text even when it contains `.`/`+`/`(`
//! and friends. The category-specific rules (token boundaries, the CSS
//! trailing colon) are checked around each candidate rather than encoded in
//! the pattern: the regex crate has no lookarounds, and `\b` misbehaves next
//! to names that start or end with a non-word character.

use baselint_catalog::FeatureDescriptor;
use regex::Regex;

use crate::{EngineError, Span};

/// Matching strategy, selected from a feature's category and match name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Exact literal substring search, no boundary constraint.
    ///
    /// Used for dotted API names (`Array.prototype.flat`): `.` is not a
    /// word character, so a boundary rule would fail to anchor next to it.
    DottedLiteral,

    /// Literal bounded by non-word characters (or text edges) on both
    /// sides, so `fetch` never fires inside `refetchData`.
    WholeToken,

    /// Whole token that must be followed (across optional whitespace) by a
    /// colon, approximating a CSS `property: value` position. The colon is
    /// not part of the reported span.
    CssProperty,
}

impl MatchStrategy {
    /// Selects the strategy for a feature.
    ///
    /// Unknown categories fall back to [`MatchStrategy::WholeToken`] so new
    /// category tags never break scanning.
    pub fn for_feature(feature: &FeatureDescriptor) -> Self {
        match feature.category.as_str() {
            "api" if feature.match_name.contains('.') => Self::DottedLiteral,
            "api" => Self::WholeToken,
            "css" => Self::CssProperty,
            _ => Self::WholeToken,
        }
    }
}

/// A compiled matcher bound to one feature.
///
/// Reusable across any number of texts; compiling never mutates the
/// descriptor.
#[derive(Debug)]
pub struct FeatureMatcher {
    literal: Regex,
    strategy: MatchStrategy,
}

/// Word-constituent characters: letters, digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if the bytes just outside `start..end` are non-word (or edges).
fn has_token_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().is_none_or(|c| !is_word_char(c));
    let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

/// True if the first non-whitespace character after `end` is a colon.
fn followed_by_colon(text: &str, end: usize) -> bool {
    text[end..].chars().find(|c| !c.is_whitespace()) == Some(':')
}

impl FeatureMatcher {
    /// Compiles a matcher for the given feature.
    pub fn compile(feature: &FeatureDescriptor) -> Result<Self, EngineError> {
        let escaped = regex::escape(&feature.match_name);
        let literal = Regex::new(&escaped).map_err(|source| EngineError::Pattern {
            id: feature.id.clone(),
            source,
        })?;

        Ok(Self {
            literal,
            strategy: MatchStrategy::for_feature(feature),
        })
    }

    /// Returns the strategy this matcher was compiled with.
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Finds every occurrence of this feature in `text`, left to right.
    ///
    /// Accepted matches never overlap for a single feature: the scan
    /// resumes past each one. A candidate rejected by the boundary or
    /// colon check consumes nothing; the scan resumes one character after
    /// its start, so a genuine match overlapping the rejected candidate is
    /// still found. The match name is non-empty (enforced at catalog
    /// load), so the scan always advances and terminates.
    pub fn find_spans<'t>(&self, text: &'t str) -> Vec<(Span, &'t str)> {
        let mut found = Vec::new();
        let mut at = 0;

        while let Some(m) = self.literal.find_at(text, at) {
            if self.accepts(text, m.start(), m.end()) {
                found.push((Span::new(m.start(), m.end()), m.as_str()));
                at = m.end();
            } else {
                let first = text[m.start()..].chars().next().map_or(1, char::len_utf8);
                at = m.start() + first;
            }
        }

        found
    }

    fn accepts(&self, text: &str, start: usize, end: usize) -> bool {
        match self.strategy {
            MatchStrategy::DottedLiteral => true,
            MatchStrategy::WholeToken => has_token_boundaries(text, start, end),
            MatchStrategy::CssProperty => {
                has_token_boundaries(text, start, end) && followed_by_colon(text, end)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn feature(category: &str, name: &str) -> FeatureDescriptor {
        FeatureDescriptor {
            id: format!("{category}-{name}"),
            category: category.to_string(),
            match_name: name.to_string(),
            safe: true,
            note: None,
            browser_support: Default::default(),
            doc_link: None,
        }
    }

    fn spans(category: &str, name: &str, text: &str) -> Vec<(usize, usize)> {
        let matcher = FeatureMatcher::compile(&feature(category, name)).unwrap();
        matcher
            .find_spans(text)
            .into_iter()
            .map(|(span, _)| (span.start, span.len()))
            .collect()
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            MatchStrategy::for_feature(&feature("api", "fetch")),
            MatchStrategy::WholeToken
        );
        assert_eq!(
            MatchStrategy::for_feature(&feature("api", "URL.canParse")),
            MatchStrategy::DottedLiteral
        );
        assert_eq!(
            MatchStrategy::for_feature(&feature("css", "gap")),
            MatchStrategy::CssProperty
        );
        assert_eq!(
            MatchStrategy::for_feature(&feature("html", "dialog")),
            MatchStrategy::WholeToken
        );
    }

    #[test]
    fn test_api_word_boundaries() {
        assert_eq!(spans("api", "fetch", "await fetch(url)"), vec![(6, 5)]);
        assert!(spans("api", "fetch", "refetchData()").is_empty());
        assert!(spans("api", "fetch", "fetchable").is_empty());
    }

    #[test]
    fn test_api_at_text_edges() {
        assert_eq!(spans("api", "fetch", "fetch"), vec![(0, 5)]);
        assert_eq!(spans("api", "fetch", "fetch()"), vec![(0, 5)]);
        assert_eq!(spans("api", "fetch", "x = fetch"), vec![(4, 5)]);
    }

    #[test]
    fn test_api_dotted_literal() {
        assert_eq!(spans("api", "Array.flat", "x = Array.flat(y)"), vec![(4, 10)]);
        // No boundary constraint: fires even glued to word characters.
        assert_eq!(spans("api", "Array.flat", "xArray.flatMap"), vec![(1, 10)]);
    }

    #[test]
    fn test_dotted_dot_is_literal() {
        // The dot must not act as a wildcard.
        assert!(spans("api", "Array.flat", "ArrayXflat").is_empty());
    }

    #[test]
    fn test_css_requires_colon() {
        assert_eq!(spans("css", "gap", "gap: 10px;"), vec![(0, 3)]);
        assert_eq!(spans("css", "gap", "gap   : 10px;"), vec![(0, 3)]);
        assert!(spans("css", "gap", "gapless: true").is_empty());
        assert!(spans("css", "gap", "display: gap").is_empty());
        assert!(spans("css", "gap", "the gap value").is_empty());
    }

    #[test]
    fn test_css_colon_across_newline() {
        // Whitespace between name and colon may include line breaks.
        assert_eq!(spans("css", "gap", "gap\n  : 2px"), vec![(0, 3)]);
    }

    #[test]
    fn test_css_colon_excluded_from_span() {
        let matcher = FeatureMatcher::compile(&feature("css", "gap")).unwrap();
        let found = matcher.find_spans("  gap: 1rem");
        assert_eq!(found.len(), 1);
        let (span, matched) = found[0];
        assert_eq!(matched, "gap");
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_unknown_category_falls_back_to_token() {
        assert_eq!(spans("svg", "viewBox", "<svg viewBox=...>"), vec![(5, 7)]);
        assert!(spans("svg", "viewBox", "myviewBoxed").is_empty());
    }

    #[rstest]
    #[case("a+b")]
    #[case("x*y")]
    #[case("f(n)")]
    #[case("a.b")]
    fn test_special_characters_matched_literally(#[case] name: &str) {
        let text = format!("use {name} here");
        assert_eq!(spans("other", name, &text), vec![(4, name.len())]);
    }

    #[test]
    fn test_exhaustive_scan() {
        assert_eq!(
            spans("api", "fetch", "fetch(a); fetch(b); fetch(c)"),
            vec![(0, 5), (10, 5), (20, 5)]
        );
    }

    #[test]
    fn test_rejected_candidate_does_not_hide_overlapping_match() {
        // The first `a-a` candidate in `a-a-a:` has no colon and is
        // rejected; the overlapping declaration at offset 2 must still be
        // found.
        assert_eq!(spans("css", "a-a", "a-a-a:"), vec![(2, 3)]);
    }

    #[test]
    fn test_rejected_token_candidate_does_not_consume() {
        // `xa-a` fails the leading boundary; the overlapping whole token
        // at offset 3 must still be found.
        assert_eq!(spans("other", "a-a", "xa-a-a "), vec![(3, 3)]);
    }

    #[test]
    fn test_hyphenated_css_property() {
        assert_eq!(
            spans("css", "aspect-ratio", "aspect-ratio: 16/9;"),
            vec![(0, 12)]
        );
    }

    #[test]
    fn test_non_ascii_neighbors_are_word_chars() {
        // Unicode letters count as word-constituent.
        assert!(spans("api", "fetch", "préfetch").is_empty());
    }
}
