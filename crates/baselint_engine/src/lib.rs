//! # baselint_engine
//!
//! The feature-matching engine: given a text and a catalog of feature
//! descriptors, find every textual occurrence of every feature, ordered by
//! start offset.
//!
//! The engine is a best-effort lexical scanner, not a parser. It compiles
//! one matcher per feature (strategy chosen by category), runs each matcher
//! exhaustively over the text, and merges the results with a stable sort so
//! catalog order breaks ties. Scans are pure: no caching, no shared mutable
//! state, identical inputs give identical output.
//!
//! ## Example
//!
//! ```rust,ignore
//! use baselint_catalog::Catalog;
//! use baselint_engine::MatchEngine;
//!
//! let catalog = Catalog::embedded()?;
//! let engine = MatchEngine::new(&catalog)?;
//!
//! for occurrence in engine.scan("await fetch(url)") {
//!     println!("{} at {}", occurrence.feature.id, occurrence.start());
//! }
//! ```

mod engine;
mod error;
mod occurrence;
mod pattern;
mod span;

pub use engine::{MatchEngine, find_feature_matches};
pub use error::EngineError;
pub use occurrence::Occurrence;
pub use pattern::{FeatureMatcher, MatchStrategy};
pub use span::Span;
