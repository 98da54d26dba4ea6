//! Known quote categories and their display metadata.
//!
//! The bundled catalog ships with the categories listed here. A catalog loaded from
//! disk may carry other keys; those are still selectable but have no label or
//! description.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Categories of the bundled catalog.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Inspirational,
    Funny,
    Life,
    Wisdom,
    Success,
}

impl Category {
    /// Catalog key of the category.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Inspirational => "Inspirational",
            Category::Funny => "Funny",
            Category::Life => "Life",
            Category::Wisdom => "Wisdom",
            Category::Success => "Success",
        }
    }

    /// One-line description shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Inspirational => "Motivating quotes to inspire and uplift your spirit",
            Category::Funny => "Humorous quotes to brighten your day with laughter",
            Category::Life => "Profound insights about life and human experience",
            Category::Wisdom => "Timeless wisdom from great thinkers and philosophers",
            Category::Success => "Motivational quotes about achieving success and goals",
        }
    }

    /// Metadata for a catalog key, if it names a known category.
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}
