//! Facet option lists for display.

use lesmat_catalog::{Facet, Locale, Vocabulary};
use serde::Serialize;

use crate::counts::FacetCounts;
use crate::state::FilterState;
use crate::text::normalize;

/// One selectable term in a facet list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    /// Term identifier.
    pub id: String,
    /// Localized title.
    pub title: String,
    /// All-but-one count.
    pub count: usize,
    /// Whether the term is currently selected.
    pub selected: bool,
}

/// The options to show for `facet`.
///
/// Terms that would match nothing are hidden unless selected. Options are
/// ordered by count, then by [`collation_key`] of the title, then by the
/// exact title.
pub fn facet_options(
    vocabulary: &Vocabulary,
    facet: Facet,
    counts: &FacetCounts,
    state: &FilterState,
    locale: Locale,
) -> Vec<FacetOption> {
    let mut options: Vec<(String, FacetOption)> = vocabulary
        .terms(facet)
        .iter()
        .map(|term| FacetOption {
            id: term.id.to_string(),
            title: term.title(locale).to_string(),
            count: counts.get(facet, term.id.as_str()),
            selected: state.is_selected(facet, term.id.as_str()),
        })
        .filter(|option| option.count > 0 || option.selected)
        .map(|option| (collation_key(&option.title), option))
        .collect();

    options.sort_by(|(a_key, a), (b_key, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| a_key.cmp(b_key))
            .then_with(|| a.title.cmp(&b.title))
    });
    options.into_iter().map(|(_, option)| option).collect()
}

/// Sort key for titles: base letters only.
///
/// Accents and case are ignored, letters without a decomposition are spelled
/// out (`ß` as `ss`, `ø` as `o`, `æ` as `ae`) and leading punctuation is
/// skipped. This approximates a base-strength collation for Dutch and German
/// titles; it is not a full locale collation.
pub fn collation_key(title: &str) -> String {
    let folded = normalize(title);
    let mut key = String::with_capacity(folded.len());
    for c in folded.trim_start_matches(|c: char| !c.is_alphanumeric()).chars() {
        match c {
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            'ø' => key.push('o'),
            'ł' => key.push('l'),
            'đ' => key.push('d'),
            'ı' => key.push('i'),
            other => key.push(other),
        }
    }
    key
}
