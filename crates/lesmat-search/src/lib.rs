//! Faceted search for the Lesmat catalog.
//!
//! This crate filters an in-memory list of course materials by free text and
//! six independent facets, ranks the result, counts facet options, and keeps
//! the filter state in the URL.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       lesmat-search                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  FilterState (query + per-facet selections)                  │
//! │  FacetedSearch                                               │
//! │  ├── search()        → ranked SearchResults                  │
//! │  └── facet_counts()  → all-but-one FacetCounts               │
//! │  facet_options() / Pager / Neighbors                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  query_string (FilterState ⇄ ?q=…&types=…)                   │
//! │  UrlSync (debounced history state machine)                   │
//! │  DebouncedUrlSync (tokio task running UrlSync)               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use lesmat_catalog::{Catalog, Facet, Locale};
//! use lesmat_search::{FacetedSearch, FilterState};
//!
//! let catalog = Catalog::from_json_str(r#"{"materials": [
//!     {"id": 1, "title_nl": "Reizen in Duitsland", "cefr": ["B1"]},
//!     {"id": 2, "title_nl": "Reizen", "cefr": ["A2"], "featured": true}
//! ]}"#)?;
//!
//! let engine = FacetedSearch::new(catalog.materials(), Locale::Nl);
//! let state = FilterState::new().with_query("reizen");
//!
//! let results = engine.search(&state);
//! let ids: Vec<_> = results.materials().map(|m| m.id.as_str()).collect();
//! assert_eq!(ids, ["2", "1"]);
//!
//! let counts = engine.facet_counts(&state);
//! assert_eq!(counts.get(Facet::Cefr, "B1"), 1);
//! # Ok::<(), lesmat_core::Error>(())
//! ```

pub mod counts;
pub mod driver;
pub mod engine;
pub mod history;
pub mod navigation;
pub mod options;
pub mod pager;
pub mod query_string;
pub mod state;
pub mod text;

mod proptests;

pub use counts::FacetCounts;
pub use driver::{DebouncedUrlSync, SharedHistory};
pub use engine::{CompiledFilter, FacetedSearch, Hit, SearchResults, TextMatch};
pub use history::{DEFAULT_PUSH_DELAY, History, MemoryHistory, SyncState, UrlSync};
pub use navigation::{Neighbors, material_url, overview_url};
pub use options::{FacetOption, collation_key, facet_options};
pub use pager::{DEFAULT_GROWTH_FACTOR, DEFAULT_PAGE_SIZE, Pager};
pub use query_string::{apply_to_url, from_query_string, from_url, to_query_string};
pub use state::{FilterState, SEPARATOR};
pub use text::{Query, normalize, query_words};
