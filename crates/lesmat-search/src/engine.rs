//! The faceted search engine.
//!
//! [`FacetedSearch`] wraps an immutable slice of records for one locale and
//! answers two questions for a [`FilterState`]:
//!
//! - which records are visible, and in what order ([`FacetedSearch::search`]);
//! - how many records each facet option would leave if it were the only
//!   selection in its facet ([`FacetedSearch::facet_counts`]).
//!
//! Both go through a single predicate, [`CompiledFilter::admits`], which
//! takes the facet to ignore as a parameter.

use std::cmp::{Ordering, Reverse};
use std::collections::HashSet;

use lesmat_catalog::{CourseMaterial, Facet, Locale};
use serde::Serialize;

use crate::counts::FacetCounts;
use crate::state::FilterState;
use crate::text::{Query, normalize};

/// How a visible record satisfied the text query.
///
/// Orders from strongest to weakest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    /// Every word occurs in the title or description.
    Primary,
    /// Every word occurs in the titles of the record's topics.
    Secondary,
    /// No query was active.
    Unfiltered,
}

/// A visible record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hit<'a> {
    /// The record.
    pub material: &'a CourseMaterial,
    /// How it matched the query.
    pub text_match: TextMatch,
}

/// The ranked visible records for one filter state.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    /// Visible records, best first.
    pub hits: Vec<Hit<'a>>,
}

impl<'a> SearchResults<'a> {
    /// Number of visible records.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Visible records, best first.
    pub fn materials(&self) -> impl Iterator<Item = &'a CourseMaterial> + '_ {
        self.hits.iter().map(|hit| hit.material)
    }

    /// Zero-based rank of the record with identifier `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.hits.iter().position(|hit| hit.material.id == id)
    }
}

/// Precomputed search text of one record.
#[derive(Debug)]
struct Entry<'a> {
    material: &'a CourseMaterial,
    primary: String,
    secondary: String,
}

impl<'a> Entry<'a> {
    fn new(material: &'a CourseMaterial, locale: Locale) -> Self {
        let primary = normalize(&format!(
            "{} {}",
            material.title(locale),
            material.description(locale)
        ));
        let secondary = normalize(&material.topic_titles(locale).collect::<Vec<_>>().join(" "));
        Self {
            material,
            primary,
            secondary,
        }
    }
}

/// A filter state prepared for repeated evaluation.
#[derive(Debug)]
pub struct CompiledFilter<'s> {
    query: Query,
    selections: Vec<(Facet, HashSet<&'s str>)>,
}

impl<'s> CompiledFilter<'s> {
    /// Prepare `state`.
    pub fn new(state: &'s FilterState) -> Self {
        Self {
            query: Query::parse(state.query()),
            selections: Facet::ALL
                .into_iter()
                .filter_map(|facet| {
                    let ids = state.selected(facet);
                    (!ids.is_empty()).then(|| (facet, ids.iter().map(String::as_str).collect()))
                })
                .collect(),
        }
    }

    fn text_match(&self, entry: &Entry<'_>) -> Option<TextMatch> {
        if self.query.is_empty() {
            Some(TextMatch::Unfiltered)
        } else if self.query.matches(&entry.primary) {
            Some(TextMatch::Primary)
        } else if self.query.matches(&entry.secondary) {
            Some(TextMatch::Secondary)
        } else {
            None
        }
    }

    /// Whether `material` passes every facet filter except `except`.
    ///
    /// Within a facet any selected identifier suffices; across facets all
    /// must pass. A facet without selection passes everything.
    pub fn admits(&self, material: &CourseMaterial, except: Option<Facet>) -> bool {
        self.selections
            .iter()
            .filter(|(facet, _)| Some(*facet) != except)
            .all(|(facet, selected)| material.facet_ids(*facet).any(|id| selected.contains(id)))
    }
}

/// Faceted search over an immutable set of records.
#[derive(Debug)]
pub struct FacetedSearch<'a> {
    entries: Vec<Entry<'a>>,
    locale: Locale,
}

impl<'a> FacetedSearch<'a> {
    /// Index `materials` for searching in `locale`.
    pub fn new(materials: &'a [CourseMaterial], locale: Locale) -> Self {
        Self {
            entries: materials
                .iter()
                .map(|material| Entry::new(material, locale))
                .collect(),
            locale,
        }
    }

    /// The locale searched in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of records searched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn text_matches<'f>(
        &'f self,
        filter: &'f CompiledFilter<'_>,
    ) -> impl Iterator<Item = (&'f Entry<'a>, TextMatch)> + 'f {
        self.entries
            .iter()
            .filter_map(move |entry| filter.text_match(entry).map(|m| (entry, m)))
    }

    /// The visible records for `state`, ranked.
    ///
    /// Featured records come first; with an active query, primary matches
    /// precede topic-only matches; then newer before older. Remaining ties
    /// keep input order.
    pub fn search(&self, state: &FilterState) -> SearchResults<'a> {
        let filter = CompiledFilter::new(state);
        let mut hits: Vec<Hit<'a>> = self
            .text_matches(&filter)
            .filter(|(entry, _)| filter.admits(entry.material, None))
            .map(|(entry, text_match)| Hit {
                material: entry.material,
                text_match,
            })
            .collect();
        hits.sort_by(rank);

        log::debug!(
            "Search {:?}: {} of {} materials visible",
            state.query(),
            hits.len(),
            self.entries.len()
        );
        SearchResults { hits }
    }

    /// All-but-one counts for every facet.
    ///
    /// A record contributes once to each distinct identifier it carries,
    /// even when the identifier is listed twice.
    pub fn facet_counts(&self, state: &FilterState) -> FacetCounts {
        let filter = CompiledFilter::new(state);
        let mut counts = FacetCounts::default();
        for (entry, _) in self.text_matches(&filter) {
            for facet in Facet::ALL {
                if !filter.admits(entry.material, Some(facet)) {
                    continue;
                }
                let distinct: HashSet<&str> = entry.material.facet_ids(facet).collect();
                for id in distinct {
                    counts.increment(facet, id);
                }
            }
        }
        counts
    }
}

fn rank(a: &Hit<'_>, b: &Hit<'_>) -> Ordering {
    let key = |hit: &Hit<'_>| {
        (
            Reverse(hit.material.featured),
            hit.text_match,
            Reverse(hit.material.created_millis()),
        )
    };
    key(a).cmp(&key(b))
}
