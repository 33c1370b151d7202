//! Filter state in URLs and browser history.

use std::time::Duration;

use lesmat_catalog::{Facet, Locale};
use lesmat_search::{
    DEFAULT_PUSH_DELAY, DebouncedUrlSync, FacetedSearch, FilterState, History, SharedHistory,
    apply_to_url, from_url,
};
use url::Url;

use crate::common::{catalog, ids};

#[test]
fn test_shared_link_restores_results() {
    let catalog = catalog();
    let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);

    let state = FilterState::new()
        .with_query("reizen")
        .with_selected(Facet::Cefr, "A2");
    let link = apply_to_url(
        &state,
        &Url::parse("https://lesmateriaal.example/nl?ref=nieuwsbrief").unwrap(),
    );
    assert_eq!(link.query(), Some("ref=nieuwsbrief&q=reizen&cefr=A2"));

    let restored = from_url(&link);
    assert_eq!(restored, state);
    assert_eq!(ids(engine.search(&restored).materials()), ["2"]);
}

#[tokio::test(start_paused = true)]
async fn test_typing_creates_one_history_entry() {
    let history = SharedHistory::new(Url::parse("https://lesmateriaal.example/nl").unwrap());
    let sync = DebouncedUrlSync::spawn(history.clone(), DEFAULT_PUSH_DELAY);
    assert!(sync.initial_state().is_empty());

    for query in ["r", "re", "rei", "reiz", "reizen"] {
        sync.filter_changed(FilterState::new().with_query(query));
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    assert_eq!(history.location().query(), Some("q=reizen"));
    assert_eq!(history.snapshot().entries().len(), 1);

    tokio::time::sleep(DEFAULT_PUSH_DELAY).await;
    let entries = history.snapshot();
    assert_eq!(entries.entries().len(), 2);
    assert_eq!(entries.entries()[0].query(), None);
    assert_eq!(entries.entries()[1].query(), Some("q=reizen"));

    assert!(history.back());
    assert_eq!(sync.navigated().await, Some(FilterState::new()));
    assert!(history.forward());
    assert_eq!(
        sync.navigated().await,
        Some(FilterState::new().with_query("reizen"))
    );
}
