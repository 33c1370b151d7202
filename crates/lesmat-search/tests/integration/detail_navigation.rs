//! Detail page navigation within the filtered overview.

use lesmat_catalog::{Facet, Locale};
use lesmat_search::{FacetedSearch, FilterState, Neighbors, material_url, overview_url};

use crate::common::catalog;

#[test]
fn test_neighbors_follow_overview_ranking() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    let state = FilterState::new().with_query("reizen");
    let results = engine.search(&state);

    let current = catalog.find("reizen-in-duitsland").unwrap();
    let nav = Neighbors::locate(&results, current.id.as_str()).unwrap();
    assert_eq!(nav.label(Locale::Nl).as_deref(), Some("2 van 2"));
    assert!(nav.next.is_none());

    let previous = nav.previous.unwrap();
    assert_eq!(
        material_url(previous, Locale::Nl, &state),
        "/nl/lesmateriaal/reizen?q=reizen"
    );
    assert_eq!(overview_url(Locale::Nl, &state), "/nl?q=reizen");
}

#[test]
fn test_material_without_slug_routes_by_title() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::De);
    let state = FilterState::new().with_selected(Facet::MaterialType, "w");
    let results = engine.search(&state);

    let nav = Neighbors::locate(&results, "4").unwrap();
    let previous = nav.previous.unwrap();
    assert_eq!(
        material_url(previous, Locale::De, &state),
        "/de/lesmateriaal/boodschappen_doen?types=w"
    );
    assert_eq!(catalog.find("boodschappen_doen").unwrap().id, "3");
    assert_eq!(catalog.find("id:3").unwrap().id, "3");
    assert_eq!(nav.label(Locale::De).as_deref(), Some("2 von 2"));
}

#[test]
fn test_navigation_hidden_for_single_result() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    let results = engine.search(&FilterState::new().with_query("duitsland"));
    let nav = Neighbors::locate(&results, "1").unwrap();
    assert!(!nav.is_navigable());
    assert!(nav.label(Locale::Nl).is_none());
}

#[test]
fn test_material_outside_filters_has_no_neighbors() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
    let results = engine.search(&FilterState::new().with_selected(Facet::Cefr, "B1"));
    assert!(Neighbors::locate(&results, "2").is_none());
}
