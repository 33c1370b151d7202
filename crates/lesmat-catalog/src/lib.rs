//! Catalog model for Lesmat.
//!
//! Records, taxonomy terms, facets, vocabularies and locales, plus loading
//! of CMS JSON exports. Everything here is immutable once loaded; filtering
//! lives in `lesmat-search`.

#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod facet;
pub mod labels;
pub mod locale;
pub mod material;
pub mod term;
pub mod vocabulary;

pub use catalog::Catalog;
pub use facet::Facet;
pub use labels::Dictionary;
pub use locale::Locale;
pub use material::{CourseMaterial, FacetIds, MaterialStatus};
pub use term::{Term, TermRef, UNTITLED};
pub use vocabulary::Vocabulary;
