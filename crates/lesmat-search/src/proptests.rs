//! Property-based tests for the search engine.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::engine::FacetedSearch;
    use crate::query_string::{from_query_string, to_query_string};
    use crate::state::FilterState;
    use crate::text::normalize;
    use lesmat_catalog::{CourseMaterial, Facet, Locale, TermRef};
    use lesmat_catalog::material::parse_timestamp;
    use proptest::prelude::*;

    const TOPICS: [&str; 4] = ["t1", "t2", "t3", "t4"];
    const LEVELS: [&str; 3] = ["A1", "B1", "C1"];

    fn facet() -> impl Strategy<Value = Facet> {
        prop::sample::select(Facet::ALL.to_vec())
    }

    fn filter_state() -> impl Strategy<Value = FilterState> {
        (
            prop::option::of("[a-zA-Z äöüéß&=+%,\\t]{0,12}"),
            prop::collection::vec((facet(), "[A-Za-z0-9_, -]{1,8}"), 0..6),
        )
            .prop_map(|(query, selections)| {
                let mut state = FilterState::new().with_query(query.unwrap_or_default());
                for (facet, id) in selections {
                    state.select(facet, &id);
                }
                state
            })
    }

    fn material() -> impl Strategy<Value = CourseMaterial> {
        (
            0u32..10_000,
            prop::sample::select(vec!["Reizen", "Eten", "Reizen en eten", "Wonen"]),
            any::<bool>(),
            prop::sample::subsequence(TOPICS.to_vec(), 0..=TOPICS.len()),
            prop::sample::subsequence(LEVELS.to_vec(), 0..=LEVELS.len()),
            2015i32..2025,
        )
            .prop_map(|(id, title, featured, topics, levels, year)| {
                let mut m = CourseMaterial::new(u64::from(id));
                m.title_nl = Some(title.to_string());
                m.featured = featured;
                m.topics = topics.into_iter().map(|t| TermRef::Id(t.into())).collect();
                m.cefr = levels.into_iter().map(str::to_string).collect();
                m.created_at = parse_timestamp(&format!("{year}-06-01"));
                m
            })
    }

    fn selection() -> impl Strategy<Value = FilterState> {
        (
            prop::sample::select(vec!["", "reizen", "eten"]),
            prop::sample::subsequence(LEVELS.to_vec(), 0..=1),
        )
            .prop_map(|(query, levels)| {
                let mut state = FilterState::new().with_query(query);
                state.set_selection(Facet::Cefr, levels);
                state
            })
    }

    proptest! {
        #[test]
        fn test_normalize_idempotent(s in "[a-zA-Z0-9 À-žẞİı\\x{0300}-\\x{036F}]{0,24}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_query_string_roundtrip(state in filter_state()) {
            let serialized = to_query_string(&state);
            let parsed = from_query_string(&serialized);
            prop_assert_eq!(&parsed, &state);
            prop_assert_eq!(to_query_string(&parsed), serialized);
        }

        #[test]
        fn test_empty_query_is_noop(materials in prop::collection::vec(material(), 0..12)) {
            let engine = FacetedSearch::new(&materials, Locale::Nl);
            let blank = FilterState::new().with_query("   ");
            prop_assert_eq!(engine.search(&blank).len(), materials.len());
        }

        #[test]
        fn test_counts_match_single_selection(
            materials in prop::collection::vec(material(), 0..12),
            state in selection(),
            topic in prop::sample::select(TOPICS.to_vec()),
        ) {
            let engine = FacetedSearch::new(&materials, Locale::Nl);
            let counts = engine.facet_counts(&state);
            let mut only = state.clone();
            only.set_selection(Facet::Topic, [topic]);
            prop_assert_eq!(counts.get(Facet::Topic, topic), engine.search(&only).len());
        }

        #[test]
        fn test_ranking_order(
            materials in prop::collection::vec(material(), 0..16),
            state in selection(),
        ) {
            let engine = FacetedSearch::new(&materials, Locale::Nl);
            let results = engine.search(&state);
            for pair in results.hits.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.material.featured >= b.material.featured);
                if a.material.featured == b.material.featured {
                    prop_assert!(a.text_match <= b.text_match);
                    if a.text_match == b.text_match {
                        prop_assert!(a.material.created_millis() >= b.material.created_millis());
                    }
                }
            }
        }
    }
}
