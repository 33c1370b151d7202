//! Filter state ⇄ URL query string.
//!
//! ```text
//! ?q=<text>&types=<id,id>&schoolTypes=…&competences=…&topics=…&langs=…&cefr=…
//! ```
//!
//! Each facet's selection is one comma-joined value; keys with nothing to
//! say are left out.

use std::collections::HashSet;

use lesmat_catalog::Facet;
use url::{Url, form_urlencoded};

use crate::state::{FilterState, SEPARATOR};

/// Query-string key of the search text.
pub const QUERY_KEY: &str = "q";

fn is_filter_key(key: &str) -> bool {
    key == QUERY_KEY || Facet::from_query_key(key).is_some()
}

fn filter_pairs(state: &FilterState) -> impl Iterator<Item = (&'static str, String)> + '_ {
    let query = state
        .has_query()
        .then(|| (QUERY_KEY, state.query().to_string()));
    let facets = Facet::ALL.into_iter().filter_map(move |facet| {
        let ids = state.selected(facet);
        (!ids.is_empty()).then(|| (facet.query_key(), ids.join(SEPARATOR)))
    });
    query.into_iter().chain(facets)
}

/// Serialize `state` to a query string without the leading `?`.
///
/// ```
/// use lesmat_catalog::Facet;
/// use lesmat_search::{FilterState, query_string::to_query_string};
///
/// let state = FilterState::new()
///     .with_query("eten en drinken")
///     .with_selected(Facet::Cefr, "A1")
///     .with_selected(Facet::Cefr, "A2");
/// assert_eq!(to_query_string(&state), "q=eten+en+drinken&cefr=A1%2CA2");
/// ```
pub fn to_query_string(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in filter_pairs(state) {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Parse a query string (with or without the leading `?`).
///
/// Unknown keys are ignored and the first occurrence of a repeated key wins.
pub fn from_query_string(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::new();
    let mut seen = HashSet::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if !is_filter_key(&key) || !seen.insert(key.clone()) {
            continue;
        }
        match Facet::from_query_key(&key) {
            Some(facet) => state.set_selection(facet, value.split(SEPARATOR)),
            None => state.set_query(value),
        }
    }
    state
}

/// Read the filter state from a URL.
pub fn from_url(url: &Url) -> FilterState {
    from_query_string(url.query().unwrap_or_default())
}

/// A copy of `url` carrying `state`, keeping unrelated query parameters.
///
/// Foreign parameters keep their relative order and precede the filter
/// parameters. The fragment is kept.
pub fn apply_to_url(state: &FilterState, url: &Url) -> Url {
    let foreign: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_filter_key(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &foreign {
        serializer.append_pair(key, value);
    }
    for (key, value) in filter_pairs(state) {
        serializer.append_pair(key, &value);
    }
    let query = serializer.finish();

    let mut updated = url.clone();
    updated.set_query((!query.is_empty()).then_some(query.as_str()));
    updated
}
