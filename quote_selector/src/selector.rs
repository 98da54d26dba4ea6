//! Randomized, duplicate-avoiding quote selection.
//!
//! [`select`] is a pure function of the catalog, the request and the random source.
//! It filters the category by the request's exclusion set, falls back when too many
//! quotes are excluded, shuffles the pool with an unbiased Fisher-Yates shuffle and
//! returns the first `count` quotes.
//!
//! The selector keeps no memory between calls. Callers that want to avoid showing the
//! same quote on consecutive refreshes pass the previously returned ids as the
//! exclusion set (see [`crate::history::RefreshHistory`]).
use std::collections::HashSet;

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use strum_macros::{Display, EnumString};

use crate::catalog::Catalog;
use crate::error::QuoteError;
use crate::quote::{Quote, QuoteId};
use crate::result::Result;

/// Number of quotes returned when a request does not say otherwise.
pub const DEFAULT_COUNT: usize = 3;

/// What to do when the exclusion set leaves fewer than `count` quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString)]
pub enum ExclusionFallback {
    /// Drop the exclusion set and draw from the whole category.
    #[default]
    #[value(name = "ignore")]
    #[strum(to_string = "ignore")]
    IgnoreExclusions,
    /// Return every non-excluded quote, then fill the remaining slots from the
    /// excluded ones.
    #[value(name = "pad")]
    #[strum(to_string = "pad")]
    PadWithExcluded,
}

/// Parameters of a single selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Category key to draw from.
    pub category: String,
    /// Maximum number of quotes to return. Must be at least 1.
    pub count: usize,
    /// Ids to avoid, typically the ones shown by the previous refresh.
    pub exclude_ids: HashSet<QuoteId>,
}

impl SelectionRequest {
    /// Request [`DEFAULT_COUNT`] quotes from `category` with no exclusions.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            count: DEFAULT_COUNT,
            exclude_ids: HashSet::new(),
        }
    }

    /// Set the number of quotes to return.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Add ids to the exclusion set.
    pub fn excluding<I: IntoIterator<Item = QuoteId>>(mut self, ids: I) -> Self {
        self.exclude_ids.extend(ids);
        self
    }
}

/// Draw up to `request.count` distinct quotes from `request.category`.
///
/// Fails with [`QuoteError::CategoryNotFound`] when the category is missing or empty,
/// and otherwise with [`QuoteError::Unexpected`] when `count` is zero.
pub fn select<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: &SelectionRequest,
    fallback: ExclusionFallback,
    rng: &mut R,
) -> Result<Vec<Quote>> {
    let quotes = match catalog.quotes(&request.category) {
        Some(quotes) if !quotes.is_empty() => quotes,
        _ => return Err(QuoteError::CategoryNotFound(request.category.clone())),
    };

    if request.count == 0 {
        return Err(QuoteError::Unexpected(
            "count must be at least 1".to_string(),
        ));
    }

    let (mut available, mut excluded): (Vec<&Quote>, Vec<&Quote>) = quotes
        .iter()
        .partition(|q| !request.exclude_ids.contains(&q.id));

    let mut pool = if available.len() >= request.count {
        available.shuffle(rng);
        available
    } else {
        debug!(
            "Only {} of {} quotes in {} remain after exclusions, falling back ({})",
            available.len(),
            quotes.len(),
            request.category,
            fallback
        );
        match fallback {
            ExclusionFallback::IgnoreExclusions => {
                let mut all: Vec<&Quote> = quotes.iter().collect();
                all.shuffle(rng);
                all
            }
            ExclusionFallback::PadWithExcluded => {
                available.shuffle(rng);
                excluded.shuffle(rng);
                available.append(&mut excluded);
                available
            }
        }
    };

    pool.truncate(request.count);
    debug!(
        "Selected {} quotes from {}: {:?}",
        pool.len(),
        request.category,
        pool.iter().map(|q| q.id).collect::<Vec<_>>()
    );
    Ok(pool.into_iter().cloned().collect())
}
