//! Global and per-surface search state

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Distinct queries remembered, most recent first
pub const SEARCH_HISTORY_LIMIT: usize = 20;

/// Surfaces with their own search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSurface {
    Messages,
    Contacts,
    Ai,
}

impl SearchSurface {
    pub const ALL: [SearchSurface; 3] = [
        SearchSurface::Messages,
        SearchSurface::Contacts,
        SearchSurface::Ai,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub global_query: String,
    pub messages_query: String,
    pub contacts_query: String,
    pub ai_query: String,
    pub filters: BTreeMap<String, Value>,
    /// Result sets keyed by scope (`global`, `messages`, ...)
    pub results: BTreeMap<String, Value>,
    pub history: Vec<String>,
}

impl SearchState {
    pub fn query(&self, surface: SearchSurface) -> &str {
        match surface {
            SearchSurface::Messages => &self.messages_query,
            SearchSurface::Contacts => &self.contacts_query,
            SearchSurface::Ai => &self.ai_query,
        }
    }

    fn query_mut(&mut self, surface: SearchSurface) -> &mut String {
        match surface {
            SearchSurface::Messages => &mut self.messages_query,
            SearchSurface::Contacts => &mut self.contacts_query,
            SearchSurface::Ai => &mut self.ai_query,
        }
    }

    pub fn set_query(&mut self, surface: SearchSurface, query: String) {
        *self.query_mut(surface) = query;
    }

    /// Set the global query and remember it if it is new
    pub fn set_global_query(&mut self, query: String) {
        if !query.is_empty() && !self.history.contains(&query) {
            self.history.insert(0, query.clone());
            self.history.truncate(SEARCH_HISTORY_LIMIT);
        }
        self.global_query = query;
    }

    /// Clear one surface, or the global query and every surface
    pub fn clear(&mut self, surface: Option<SearchSurface>) {
        match surface {
            Some(surface) => self.query_mut(surface).clear(),
            None => {
                self.global_query.clear();
                for surface in SearchSurface::ALL {
                    self.query_mut(surface).clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_dedupes_against_whole_history() {
        let mut search = SearchState::default();
        search.set_global_query("alpha".into());
        search.set_global_query("beta".into());
        search.set_global_query("alpha".into());

        assert_eq!(search.global_query, "alpha");
        assert_eq!(search.history, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_empty_query_not_remembered() {
        let mut search = SearchState::default();
        search.set_global_query(String::new());
        assert!(search.history.is_empty());
    }

    #[test]
    fn test_clear_single_surface() {
        let mut search = SearchState::default();
        search.set_query(SearchSurface::Messages, "m".into());
        search.set_query(SearchSurface::Ai, "a".into());

        search.clear(Some(SearchSurface::Messages));

        assert_eq!(search.query(SearchSurface::Messages), "");
        assert_eq!(search.query(SearchSurface::Ai), "a");
    }
}
