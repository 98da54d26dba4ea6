//! Caller-side memory of the quotes shown by the last refresh.
//!
//! The selector is stateless, so repeat avoidance lives with the caller: after each
//! successful selection the caller records what it showed, and the next request for
//! the same category excludes those ids.
use std::collections::{HashMap, HashSet};

use crate::quote::{QuoteId, SelectionResponse};
use crate::selector::SelectionRequest;

/// Ids returned by the most recent successful selection, per category.
#[derive(Debug, Clone, Default)]
pub struct RefreshHistory {
    last_shown: HashMap<String, Vec<QuoteId>>,
}

impl RefreshHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids to exclude on the next refresh of `category`.
    pub fn exclusions(&self, category: &str) -> HashSet<QuoteId> {
        self.last_shown
            .get(category)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Request for the next refresh of `category`, excluding the last shown ids.
    pub fn next_request(&self, category: &str, count: usize) -> SelectionRequest {
        SelectionRequest::new(category)
            .with_count(count)
            .excluding(self.exclusions(category))
    }

    /// Remember what `response` showed. A failed response leaves the history unchanged.
    pub fn record(&mut self, category: &str, response: &SelectionResponse) {
        if response.success {
            self.last_shown.insert(category.to_string(), response.ids());
        }
    }

    /// Forget `category`, so its next refresh draws from the whole pool.
    pub fn clear(&mut self, category: &str) {
        self.last_shown.remove(category);
    }
}
