//! Per-facet candidate counts.

use std::collections::BTreeMap;

use lesmat_catalog::Facet;
use serde::Serialize;

/// For each facet, term identifier → number of records that pass the text
/// query and every facet filter except that facet.
///
/// Derived data: a fresh map is built for every filter state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    counts: BTreeMap<Facet, BTreeMap<String, usize>>,
}

impl FacetCounts {
    pub(crate) fn increment(&mut self, facet: Facet, id: &str) {
        *self
            .counts
            .entry(facet)
            .or_default()
            .entry(id.to_string())
            .or_default() += 1;
    }

    /// Count for one term; zero when absent.
    pub fn get(&self, facet: Facet, id: &str) -> usize {
        self.counts
            .get(&facet)
            .and_then(|ids| ids.get(id))
            .copied()
            .unwrap_or_default()
    }

    /// Non-zero counts of one facet, ordered by identifier.
    pub fn facet(&self, facet: Facet) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .get(&facet)
            .into_iter()
            .flatten()
            .map(|(id, count)| (id.as_str(), *count))
    }
}
