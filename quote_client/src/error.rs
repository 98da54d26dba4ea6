//! Error types used across the Quote Client.
//!
//! The `ClientError` enum unifies I/O, catalog and serialization errors so that
//! they can be propagated easily with `Result<T, ClientError>`.
use std::io;

use quote_selector::QuoteError;
use thiserror::Error;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum ClientError {
    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Catalog loading or selection failure from the library.
    #[error(transparent)]
    Quote(#[from] QuoteError),
    /// Failure while encoding a response as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// The Ctrl+C handler could not be installed.
    #[error("Failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
