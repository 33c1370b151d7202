//! Taxonomy terms and references to them.

use lesmat_core::Id;
use serde::{Deserialize, Deserializer, Serialize};

use crate::locale::Locale;

/// Title shown for a term that has no title in either language.
pub const UNTITLED: &str = "Untitled";

/// A taxonomy entry (material type, school type, competence, topic, or one
/// of the built-in language/CEFR values).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Term identifier.
    pub id: Id,
    /// Dutch title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_nl: Option<String>,
    /// German title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_de: Option<String>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Term {
    /// Creates a term with both titles.
    pub fn new(id: impl Into<Id>, title_nl: &str, title_de: &str) -> Self {
        Self {
            id: id.into(),
            title_nl: Some(title_nl.to_string()),
            title_de: Some(title_de.to_string()),
            slug: None,
        }
    }

    /// Localized title, if either variant is present.
    pub fn localized_title(&self, locale: Locale) -> Option<&str> {
        locale.pick(self.title_nl.as_deref(), self.title_de.as_deref())
    }

    /// Localized title for display, [`UNTITLED`] when both are empty.
    pub fn title(&self, locale: Locale) -> &str {
        self.localized_title(locale).unwrap_or(UNTITLED)
    }
}

/// A record's reference to a term.
///
/// Depending on the query depth the CMS either returns the bare identifier
/// or the populated term. Matching code only ever calls [`TermRef::id`], so
/// both shapes behave the same.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermRef {
    /// Bare identifier.
    Id(Id),
    /// Populated term object.
    Resolved(Term),
}

impl TermRef {
    /// Identifier of the referenced term, whatever the representation.
    pub fn id(&self) -> &Id {
        match self {
            Self::Id(id) => id,
            Self::Resolved(term) => &term.id,
        }
    }

    /// The populated term, when the reference was resolved.
    pub fn term(&self) -> Option<&Term> {
        match self {
            Self::Id(_) => None,
            Self::Resolved(term) => Some(term),
        }
    }
}

impl From<Id> for TermRef {
    fn from(id: Id) -> Self {
        Self::Id(id)
    }
}

impl From<Term> for TermRef {
    fn from(term: Term) -> Self {
        Self::Resolved(term)
    }
}

/// Deserialize a relationship field leniently.
///
/// Accepts `null`, a single reference (the older singular `schoolType`
/// field), or a list; `null` entries left behind by deleted terms are
/// skipped.
pub(crate) fn deserialize_refs<'de, D>(deserializer: D) -> Result<Vec<TermRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Option<TermRef>>),
        One(TermRef),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(reference)) => vec![reference],
        Some(OneOrMany::Many(refs)) => refs.into_iter().flatten().collect(),
    })
}
