//! Quote record and the query-boundary response shape.
//!
//! A `Quote` is immutable once the catalog is loaded. `SelectionResponse` is the
//! tagged `{ success, quotes?, error? }` value handed to the presentation layer, so
//! failures never cross the boundary as Rust errors.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Identifier of a quote, unique within its category. Any JSON integer in `i64` range.
pub type QuoteId = i64;

/// A single curated quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier, unique within the category.
    pub id: QuoteId,
    /// The quoted text.
    pub text: String,
    /// Attributed author.
    pub author: String,
    /// Category key the quote is filed under.
    pub category: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

/// Outcome of a selection as reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// `true` when `quotes` holds the selection.
    pub success: bool,
    /// Selected quotes, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<Quote>>,
    /// Human-readable failure reason, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SelectionResponse {
    /// Successful response carrying `quotes`.
    pub fn ok(quotes: Vec<Quote>) -> Self {
        Self {
            success: true,
            quotes: Some(quotes),
            error: None,
        }
    }

    /// Failed response carrying `err`'s boundary message.
    pub fn failed(err: &QuoteError) -> Self {
        Self {
            success: false,
            quotes: None,
            error: Some(err.boundary_message()),
        }
    }

    /// Ids of the returned quotes, empty on failure.
    pub fn ids(&self) -> Vec<QuoteId> {
        self.quotes
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|q| q.id)
            .collect()
    }
}

impl From<Result<Vec<Quote>, QuoteError>> for SelectionResponse {
    fn from(result: Result<Vec<Quote>, QuoteError>) -> Self {
        match result {
            Ok(quotes) => SelectionResponse::ok(quotes),
            Err(e) => SelectionResponse::failed(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: QuoteId) -> Quote {
        Quote {
            id,
            text: format!("text {id}"),
            author: "Anon".to_string(),
            category: "funny".to_string(),
        }
    }

    #[test]
    fn success_response_omits_error_field() {
        let response = SelectionResponse::ok(vec![quote(1)]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["quotes"][0]["id"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failed_response_omits_quotes_field() {
        let err = QuoteError::CategoryNotFound("nonexistent-category".to_string());
        let response: SelectionResponse = Err(err).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(
            json["error"],
            "No quotes found for category: nonexistent-category"
        );
        assert!(json.get("quotes").is_none());
        assert!(response.ids().is_empty());
    }

    #[test]
    fn ids_follow_quote_order() {
        let response = SelectionResponse::ok(vec![quote(4), quote(2)]);
        assert_eq!(response.ids(), vec![4, 2]);
    }
}
