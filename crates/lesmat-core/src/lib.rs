//! Lesmat Core: shared types, traits, errors, and utilities.
//!
//! This crate provides the foundational types used across all Lesmat crates.
//! It has no internal Lesmat dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: Configuration management trait
//! - [`util`]: Identifier, text folding, and slug utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigManager;

// Convenience re-exports from util
pub use util::ids::Id;
pub use util::slug::slugify;
pub use util::text::{fold_diacritics, normalize_text};
