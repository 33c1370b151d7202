//! Filtering, ranking and counting over a parsed catalog.

use lesmat_catalog::{Dictionary, Facet, Locale};
use lesmat_search::{FacetedSearch, FilterState, Pager, TextMatch, facet_options};

use crate::common::{catalog, ids};

#[test]
fn test_ranking_scenario() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);

    let reizen = FilterState::new().with_query("reizen");
    assert_eq!(ids(engine.search(&reizen).materials()), ["2", "1"]);

    let duitsland = FilterState::new().with_query("duitsland");
    assert_eq!(ids(engine.search(&duitsland).materials()), ["1"]);

    let a2 = reizen.with_selected(Facet::Cefr, "A2");
    assert_eq!(ids(engine.search(&a2).materials()), ["2"]);
    assert_eq!(engine.facet_counts(&a2).get(Facet::Cefr, "B1"), 1);
}

#[test]
fn test_drafts_are_not_searchable() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    assert!(engine.search(&FilterState::new().with_query("klaar")).is_empty());
    assert_eq!(engine.len(), 4);
}

#[test]
fn test_default_order_is_featured_then_newest() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    let results = engine.search(&FilterState::new());
    assert_eq!(ids(results.materials()), ["2", "1", "3", "4"]);
}

#[test]
fn test_german_locale_falls_back_to_dutch_text() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::De);
    let results = engine.search(&FilterState::new().with_query("MARKT"));
    assert_eq!(ids(results.materials()), ["3", "4"]);
}

#[test]
fn test_topic_title_match_is_secondary() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::De);
    let results = engine.search(&FilterState::new().with_query("essen"));
    assert_eq!(ids(results.materials()), ["3"]);
    assert_eq!(results.hits[0].text_match, TextMatch::Secondary);
}

#[test]
fn test_taxonomy_facets_and_counts() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);

    let worksheets = FilterState::new().with_selected(Facet::MaterialType, "w");
    assert_eq!(ids(engine.search(&worksheets).materials()), ["3", "4"]);

    let havo = worksheets.with_selected(Facet::SchoolType, "havo");
    assert_eq!(ids(engine.search(&havo).materials()), ["4"]);

    let counts = engine.facet_counts(&havo);
    assert_eq!(counts.get(Facet::SchoolType, "gym"), 1);
    assert_eq!(counts.get(Facet::SchoolType, "havo"), 1);
    assert_eq!(counts.get(Facet::MaterialType, "w"), 1);
    assert_eq!(counts.get(Facet::MaterialType, "v"), 1);
    assert_eq!(counts.get(Facet::Language, "nl"), 1);
}

#[test]
fn test_language_options() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::De);
    let state = FilterState::new();
    let counts = engine.facet_counts(&state);
    let options = facet_options(
        catalog.vocabulary(),
        Facet::Language,
        &counts,
        &state,
        Locale::De,
    );
    let shown: Vec<_> = options
        .iter()
        .map(|o| (o.title.as_str(), o.count))
        .collect();
    assert_eq!(shown, [("Deutsch", 2), ("Niederländisch", 1)]);
}

#[test]
fn test_stale_selection_is_pruned_before_search() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    let mut state = FilterState::new()
        .with_selected(Facet::Topic, "verwijderd")
        .with_selected(Facet::Topic, "eten");
    let removed = state.prune_stale(catalog.vocabulary());
    assert_eq!(removed, [(Facet::Topic, "verwijderd".to_string())]);
    assert_eq!(ids(engine.search(&state).materials()), ["3", "4"]);
}

#[test]
fn test_result_sentence_and_paging() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    let results = engine.search(&FilterState::new());
    let dict = Dictionary::get(Locale::Nl);
    assert_eq!(dict.results_found(results.len()), "4 lesmaterialen gevonden");

    let pager = Pager::new(3, 5);
    assert_eq!(pager.page(&results.hits).len(), 3);
    assert!(pager.has_more(results.len()));
}
