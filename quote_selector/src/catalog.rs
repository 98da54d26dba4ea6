//! Read-only catalog of quotes grouped by category.
//!
//! The catalog is built once and then shared by reference (usually behind an `Arc`)
//! with whatever consumes it. Nothing in the crate mutates it after construction.
//!
//! Catalog files are JSON objects keyed by category, each value an array of quote
//! records:
//!
//! ```json
//! { "funny": [ { "id": 1, "text": "...", "author": "...", "category": "funny" } ] }
//! ```
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::result::Result;

/// Catalog embedded in the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/quotes.json");

/// Quotes grouped by category key. Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<Quote>>,
}

impl Catalog {
    /// Build a catalog from already-grouped quotes, validating every group.
    pub fn from_categories(categories: BTreeMap<String, Vec<Quote>>) -> Result<Self> {
        for (key, quotes) in &categories {
            let mut seen = HashSet::with_capacity(quotes.len());
            for quote in quotes {
                if quote.category != *key {
                    return Err(QuoteError::InvalidCatalog(format!(
                        "quote {} is filed under {} but tagged {}",
                        quote.id, key, quote.category
                    )));
                }
                if !seen.insert(quote.id) {
                    return Err(QuoteError::DuplicateQuoteId {
                        category: key.clone(),
                        id: quote.id,
                    });
                }
            }
        }
        Ok(Self { categories })
    }

    /// Parse a JSON catalog from `reader`.
    pub fn parse_from_reader<R: Read>(reader: R) -> Result<Self> {
        let categories: BTreeMap<String, Vec<Quote>> = serde_json::from_reader(reader)?;
        Self::from_categories(categories)
    }

    /// Load a JSON catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::parse_from_reader(BufReader::new(file))?;
        info!(
            "Loaded catalog from {}: {} categories, {} quotes",
            path.display(),
            catalog.categories.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::parse_from_reader(BUILTIN_CATALOG.as_bytes())?;
        debug!(
            "Loaded built-in catalog: {} categories, {} quotes",
            catalog.categories.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Quotes of `category` in catalog order, `None` if the key is absent.
    pub fn quotes(&self, category: &str) -> Option<&[Quote]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Category keys in sorted order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Number of quotes in `category`; 0 for an unknown key.
    pub fn quote_count(&self, category: &str) -> usize {
        self.categories.get(category).map_or(0, Vec::len)
    }

    /// Total number of quotes across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// `true` if the catalog holds no quotes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
