use crate::ui::action::Action;
use crate::ui::state::UiState;

impl UiState {
    pub(super) fn handle_search_action(&mut self, action: Action) {
        let search = &mut self.search;
        match action {
            Action::UpdateGlobalSearch(query) => search.set_global_query(query),
            Action::UpdateComponentSearch { component, query } => {
                search.set_query(component, query);
            }
            Action::ClearSearch(surface) => search.clear(surface),
            Action::UpdateSearchFilters(filters) => search.filters.extend(filters),
            Action::SetSearchResults { scope, results } => {
                search.results.insert(scope, results);
            }
            Action::ClearSearchHistory => search.history.clear(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::ui::action::Action;
    use crate::ui::search::{SearchSurface, SEARCH_HISTORY_LIMIT};
    use crate::ui::transitions::test_support::Harness;

    #[test]
    fn test_global_history_dedupe() {
        let mut h = Harness::new();
        for query in ["a", "b", "a", ""] {
            h.apply(Action::UpdateGlobalSearch(query.into()));
        }
        assert_eq!(h.state.search.history, vec!["b", "a"]);
        assert_eq!(h.state.search.global_query, "");
    }

    #[test]
    fn test_global_history_evicts_oldest_past_limit() {
        let mut h = Harness::new();
        for i in 0..=SEARCH_HISTORY_LIMIT {
            h.apply(Action::UpdateGlobalSearch(format!("q{i}")));
        }

        let expected: Vec<String> = (1..=SEARCH_HISTORY_LIMIT)
            .rev()
            .map(|i| format!("q{i}"))
            .collect();
        assert_eq!(SEARCH_HISTORY_LIMIT, 20);
        assert_eq!(h.state.search.history, expected);
    }

    #[test]
    fn test_clear_one_surface_or_all() {
        let mut h = Harness::new();
        h.apply(Action::UpdateGlobalSearch("hello".into()));
        for surface in SearchSurface::ALL {
            h.apply(Action::UpdateComponentSearch {
                component: surface,
                query: "x".into(),
            });
        }

        h.apply(Action::ClearSearch(Some(SearchSurface::Contacts)));
        assert_eq!(h.state.search.query(SearchSurface::Contacts), "");
        assert_eq!(h.state.search.query(SearchSurface::Messages), "x");
        assert_eq!(h.state.search.global_query, "hello");

        h.apply(Action::ClearSearch(None));
        assert_eq!(h.state.search.global_query, "");
        assert!(SearchSurface::ALL
            .iter()
            .all(|s| h.state.search.query(*s).is_empty()));
        assert_eq!(h.state.search.history, vec!["hello"]);
    }

    #[test]
    fn test_filters_results_and_history_reset() {
        let mut h = Harness::new();
        h.apply(Action::UpdateSearchFilters(BTreeMap::from([(
            "unread".to_string(),
            json!(true),
        )])));
        h.apply(Action::UpdateSearchFilters(BTreeMap::from([(
            "from".to_string(),
            json!("ada"),
        )])));
        h.apply(Action::SetSearchResults {
            scope: "messages".into(),
            results: json!([1, 2]),
        });
        h.apply(Action::UpdateGlobalSearch("hello".into()));
        h.apply(Action::ClearSearchHistory);

        assert_eq!(h.state.search.filters.len(), 2);
        assert_eq!(h.state.search.results["messages"], json!([1, 2]));
        assert!(h.state.search.history.is_empty());
        assert_eq!(h.state.search.global_query, "hello");
    }
}
