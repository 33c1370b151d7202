//! Term vocabularies per facet.
//!
//! Taxonomy vocabularies come from the CMS; the language and CEFR
//! vocabularies are fixed and built in.

use std::collections::HashSet;

use crate::facet::Facet;
use crate::term::Term;

/// Content languages a material can be tagged with: (code, Dutch, German).
pub const LANGUAGES: [(&str, &str, &str); 3] = [
    ("nl", "Nederlands", "Niederländisch"),
    ("de", "Duits", "Deutsch"),
    ("en", "Engels", "Englisch"),
];

/// CEFR levels, in ascending order.
pub const CEFR_LEVELS: [&str; 6] = ["A1", "A2", "B1", "B2", "C1", "C2"];

/// The complete set of selectable terms, one list per facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    material_types: Vec<Term>,
    school_types: Vec<Term>,
    competences: Vec<Term>,
    topics: Vec<Term>,
    languages: Vec<Term>,
    cefr_levels: Vec<Term>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}

impl Vocabulary {
    /// Creates a vocabulary from the four CMS taxonomies.
    pub fn new(
        material_types: Vec<Term>,
        school_types: Vec<Term>,
        competences: Vec<Term>,
        topics: Vec<Term>,
    ) -> Self {
        Self {
            material_types,
            school_types,
            competences,
            topics,
            languages: LANGUAGES
                .iter()
                .map(|(code, nl, de)| Term::new(*code, nl, de))
                .collect(),
            cefr_levels: CEFR_LEVELS
                .iter()
                .map(|level| Term::new(*level, level, level))
                .collect(),
        }
    }

    /// Replace the term list of a taxonomy facet.
    ///
    /// The built-in language and CEFR vocabularies can be replaced too,
    /// which is mostly useful in tests.
    pub fn with_terms(mut self, facet: Facet, terms: Vec<Term>) -> Self {
        *self.terms_mut(facet) = terms;
        self
    }

    /// Terms of one facet, in CMS order.
    pub fn terms(&self, facet: Facet) -> &[Term] {
        match facet {
            Facet::MaterialType => &self.material_types,
            Facet::SchoolType => &self.school_types,
            Facet::Competence => &self.competences,
            Facet::Topic => &self.topics,
            Facet::Language => &self.languages,
            Facet::Cefr => &self.cefr_levels,
        }
    }

    fn terms_mut(&mut self, facet: Facet) -> &mut Vec<Term> {
        match facet {
            Facet::MaterialType => &mut self.material_types,
            Facet::SchoolType => &mut self.school_types,
            Facet::Competence => &mut self.competences,
            Facet::Topic => &mut self.topics,
            Facet::Language => &mut self.languages,
            Facet::Cefr => &mut self.cefr_levels,
        }
    }

    /// Find a term by identifier.
    pub fn term(&self, facet: Facet, id: &str) -> Option<&Term> {
        self.terms(facet).iter().find(|term| term.id == id)
    }

    /// Whether `id` is a known term of `facet`.
    pub fn contains(&self, facet: Facet, id: &str) -> bool {
        self.term(facet, id).is_some()
    }

    /// Identifier set of one facet, for repeated membership tests.
    pub fn id_set(&self, facet: Facet) -> HashSet<&str> {
        self.terms(facet).iter().map(|term| term.id.as_str()).collect()
    }
}
