//! # baselint_catalog
//!
//! The Baseline feature catalog: a read-only table of web-platform feature
//! descriptors, loaded once at startup and shared with the match engine.
//!
//! This crate provides:
//! - The `FeatureDescriptor` schema (match name, category, Baseline status,
//!   per-browser support versions, documentation link)
//! - Catalog loading from JSON, with load-time validation
//! - A curated default catalog embedded in the binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use baselint_catalog::Catalog;
//!
//! let catalog = Catalog::embedded()?;
//! for feature in catalog.iter() {
//!     println!("{}: {}", feature.id, feature.match_name);
//! }
//! ```

mod browsers;
mod catalog;
mod descriptor;
mod error;

pub use browsers::BrowserSupport;
pub use catalog::Catalog;
pub use descriptor::FeatureDescriptor;
pub use error::CatalogError;
