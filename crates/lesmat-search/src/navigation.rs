//! Previous/next navigation between detail pages.
//!
//! A detail page reached from the overview keeps the overview's filters in
//! its query string. The neighbours are taken from the same ranked list the
//! overview shows.

use lesmat_catalog::{CourseMaterial, Dictionary, Locale};

use crate::engine::SearchResults;
use crate::query_string::to_query_string;
use crate::state::FilterState;

/// Where a material sits within the visible list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbors<'a> {
    /// One-based position of the current material.
    pub position: usize,
    /// Number of visible materials.
    pub total: usize,
    /// The material ranked just above, if any.
    pub previous: Option<&'a CourseMaterial>,
    /// The material ranked just below, if any.
    pub next: Option<&'a CourseMaterial>,
}

impl<'a> Neighbors<'a> {
    /// Locate the material with identifier `id` in `results`.
    ///
    /// Returns `None` when the material is not visible under the current
    /// filters.
    pub fn locate(results: &SearchResults<'a>, id: &str) -> Option<Self> {
        let index = results.position(id)?;
        let material_at = |i: usize| results.hits.get(i).map(|hit| hit.material);
        Some(Self {
            position: index + 1,
            total: results.len(),
            previous: index.checked_sub(1).and_then(material_at),
            next: material_at(index + 1),
        })
    }

    /// Navigation is only offered when there is somewhere to go.
    pub fn is_navigable(&self) -> bool {
        self.total > 1
    }

    /// Position label such as "3 van 12", or `None` when not navigable.
    pub fn label(&self, locale: Locale) -> Option<String> {
        self.is_navigable()
            .then(|| Dictionary::get(locale).position(self.position, self.total))
    }
}

fn with_query(path: String, state: &FilterState) -> String {
    let query = to_query_string(state);
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

/// Detail page URL that carries the current filters.
pub fn material_url(material: &CourseMaterial, locale: Locale, state: &FilterState) -> String {
    with_query(material.path(locale), state)
}

/// Overview URL that restores the current filters.
pub fn overview_url(locale: Locale, state: &FilterState) -> String {
    with_query(format!("/{}", locale.code()), state)
}
