//! Utility modules for identifiers, text folding, and slugs.
//!
//! # Modules
//!
//! - [`ids`]: CMS identifiers (string or numeric)
//! - [`slug`]: URL slug generation
//! - [`text`]: Accent-insensitive text normalization

pub mod ids;
pub mod slug;
pub mod text;
