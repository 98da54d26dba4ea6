//! Error types for catalog loading and quote selection.
//!
//! `QuoteError` covers two surfaces. Selection failures use the two-variant
//! taxonomy exposed to callers (`CategoryNotFound` and `Unexpected`); catalog
//! loading adds I/O, JSON and validation failures. At the query boundary every
//! error is flattened into a `SelectionResponse` with a human-readable message,
//! see [`QuoteError::boundary_message`].
use std::io;

use thiserror::Error;

use crate::quote::QuoteId;

/// Unified error type for the quote selector crate.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The requested category is absent from the catalog or has no quotes.
    #[error("No quotes found for category: {0}")]
    CategoryNotFound(String),

    /// Any other selection failure; the message is passed through unchanged.
    #[error("{0}")]
    Unexpected(String),

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding a catalog or encoding a response with serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The catalog parsed but breaks a structural rule (e.g. a quote filed under the wrong key).
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two quotes in the same category share an id.
    #[error("Invalid catalog: duplicate quote id {id} in category {category}")]
    DuplicateQuoteId {
        /// Category key holding the duplicate.
        category: String,
        /// The repeated id.
        id: QuoteId,
    },

    /// A selection worker went away without sending its result.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl QuoteError {
    /// Message reported across the query boundary.
    ///
    /// `CategoryNotFound` and `Unexpected` keep their own wording; everything else
    /// is an unexpected failure and reports its display text.
    pub fn boundary_message(&self) -> String {
        self.to_string()
    }

    /// `true` for the `CategoryNotFound` branch of the selection taxonomy.
    pub fn is_category_not_found(&self) -> bool {
        matches!(self, QuoteError::CategoryNotFound(_))
    }
}

impl From<crossbeam_channel::RecvError> for QuoteError {
    fn from(err: crossbeam_channel::RecvError) -> Self {
        QuoteError::ChannelRecv(err.to_string())
    }
}
