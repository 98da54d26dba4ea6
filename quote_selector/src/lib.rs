//!
//! Curated quotes grouped by category, with randomized, repeat-avoiding selection.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` and the selection failure taxonomy.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record and the `SelectionResponse` boundary type.
//! - `category` — metadata for the categories of the bundled catalog.
//! - `catalog` — the read-only, validated catalog and its JSON loader.
//! - `selector` — the stateless selection function and its request type.
//! - `config` — service settings (artificial delay, seed, fallback policy).
//! - `service` — the query interface, answering requests on worker threads.
//! - `history` — caller-side memory used to avoid consecutive repeats.
#![warn(missing_docs)]
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod history;
pub mod quote;
pub mod result;
pub mod selector;
pub mod service;

pub use catalog::Catalog;
pub use category::Category;
pub use config::ServiceConfig;
pub use error::QuoteError;
pub use history::RefreshHistory;
pub use quote::{Quote, QuoteId, SelectionResponse};
pub use result::Result;
pub use selector::{DEFAULT_COUNT, ExclusionFallback, SelectionRequest, select};
pub use service::{PendingSelection, QuoteService};
