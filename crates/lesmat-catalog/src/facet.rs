//! The six independent filter dimensions of the catalog.

use std::fmt;
use std::str::FromStr;

use lesmat_core::Error;
use serde::{Deserialize, Serialize};

/// A filterable dimension of a course material.
///
/// Four facets are CMS taxonomies (terms referenced by id); language and
/// CEFR level are fixed vocabularies stored as plain tags on the record.
///
/// The declaration order is the order in which facets appear in URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    /// Material type ("Werkblad", "Video", ...).
    MaterialType,
    /// School type ("Gymnasium", "Basisschool", ...).
    SchoolType,
    /// Competence ("Lezen", "Spreken", ...).
    Competence,
    /// Topic ("Reizen", "Eten en drinken", ...).
    Topic,
    /// Content language (`nl`, `de`, `en`).
    Language,
    /// CEFR level (`A1` … `C2`).
    Cefr,
}

impl Facet {
    /// All facets, in URL order.
    pub const ALL: [Facet; 6] = [
        Facet::MaterialType,
        Facet::SchoolType,
        Facet::Competence,
        Facet::Topic,
        Facet::Language,
        Facet::Cefr,
    ];

    /// Query-string key for this facet.
    pub fn query_key(self) -> &'static str {
        match self {
            Self::MaterialType => "types",
            Self::SchoolType => "schoolTypes",
            Self::Competence => "competences",
            Self::Topic => "topics",
            Self::Language => "langs",
            Self::Cefr => "cefr",
        }
    }

    /// Look up a facet by its query-string key.
    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|facet| facet.query_key() == key)
    }

    /// Snake-case name, as used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Self::MaterialType => "material_type",
            Self::SchoolType => "school_type",
            Self::Competence => "competence",
            Self::Topic => "topic",
            Self::Language => "language",
            Self::Cefr => "cefr",
        }
    }

    /// Whether the facet's values reference CMS taxonomy terms.
    pub fn is_taxonomy(self) -> bool {
        matches!(
            self,
            Self::MaterialType | Self::SchoolType | Self::Competence | Self::Topic
        )
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = Error;

    /// Accepts either the snake-case name or the query-string key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|facet| facet.name() == s || facet.query_key() == s)
            .ok_or_else(|| Error::validation_field("facet", format!("unknown facet '{s}'")))
    }
}
