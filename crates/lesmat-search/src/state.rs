//! Filter state: the search text plus per-facet selections.

use std::collections::BTreeMap;

use lesmat_catalog::{Facet, Vocabulary};
use serde::{Deserialize, Deserializer, Serialize};

/// Separator between identifiers of one facet in a URL value.
pub const SEPARATOR: &str = ",";

/// What the user is currently filtering on.
///
/// Selections hold term identifiers only, in the order they were selected.
/// Blank and duplicate identifiers are never stored, and a facet with no
/// selection has no entry. A whitespace-only query is stored as `""`. Two
/// states that produce the same URL therefore compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default, deserialize_with = "deserialize_query")]
    query: String,
    #[serde(default)]
    selections: BTreeMap<Facet, Vec<String>>,
}

impl FilterState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style query setter.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// The search text as typed; empty when blank.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text. Blank text clears it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = blank_to_empty(query.into());
    }

    /// Builder-style selection.
    pub fn with_selected(mut self, facet: Facet, id: &str) -> Self {
        self.select(facet, id);
        self
    }

    /// Whether a non-blank query is present.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Selected identifiers of one facet.
    pub fn selected(&self, facet: Facet) -> &[String] {
        self.selections.get(&facet).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `id` is selected in `facet`.
    pub fn is_selected(&self, facet: Facet, id: &str) -> bool {
        self.selected(facet).iter().any(|s| s == id)
    }

    /// Add `id` to the selection of `facet`. Returns whether anything changed.
    ///
    /// Identifiers containing [`SEPARATOR`] cannot be written to a URL and
    /// are refused.
    pub fn select(&mut self, facet: Facet, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() || self.is_selected(facet, id) {
            return false;
        }
        if id.contains(SEPARATOR) {
            log::debug!("Refusing {facet} selection {id:?}: contains {SEPARATOR:?}");
            return false;
        }
        self.selections.entry(facet).or_default().push(id.to_string());
        true
    }

    /// Remove `id` from the selection of `facet`. Returns whether anything
    /// changed.
    pub fn deselect(&mut self, facet: Facet, id: &str) -> bool {
        let id = id.trim();
        let Some(ids) = self.selections.get_mut(&facet) else {
            return false;
        };
        let before = ids.len();
        ids.retain(|s| s != id);
        let changed = ids.len() != before;
        if ids.is_empty() {
            self.selections.remove(&facet);
        }
        changed
    }

    /// Select `id` if it is not selected, deselect it otherwise.
    pub fn toggle(&mut self, facet: Facet, id: &str) {
        if !self.deselect(facet, id) {
            self.select(facet, id);
        }
    }

    /// Replace the whole selection of `facet`, dropping blanks and
    /// duplicates.
    pub fn set_selection<I, S>(&mut self, facet: Facet, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selections.remove(&facet);
        for id in ids {
            self.select(facet, id.as_ref());
        }
    }

    /// Facets that have at least one selection, in URL order.
    pub fn active_facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.selections.keys().copied()
    }

    /// Drop the query and every selection.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selections.clear();
    }

    /// Whether neither a query nor a selection is present.
    pub fn is_empty(&self) -> bool {
        !self.has_query() && self.selections.is_empty()
    }

    /// Remove selections whose identifier is not in the vocabulary of their
    /// facet. Returns what was removed; a second call returns nothing.
    pub fn prune_stale(&mut self, vocabulary: &Vocabulary) -> Vec<(Facet, String)> {
        let mut removed = Vec::new();
        for (facet, ids) in &mut self.selections {
            let known = vocabulary.id_set(*facet);
            ids.retain(|id| {
                let keep = known.contains(id.as_str());
                if !keep {
                    removed.push((*facet, id.clone()));
                }
                keep
            });
        }
        self.selections.retain(|_, ids| !ids.is_empty());
        if !removed.is_empty() {
            log::debug!("Pruned {} stale selection(s): {removed:?}", removed.len());
        }
        removed
    }
}

fn blank_to_empty(query: String) -> String {
    if query.trim().is_empty() {
        String::new()
    } else {
        query
    }
}

fn deserialize_query<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(blank_to_empty)
}
