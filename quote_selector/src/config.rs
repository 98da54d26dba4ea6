//! Service configuration and its defaults.
use std::time::Duration;

use crate::selector::ExclusionFallback;

/// Simulated latency before a selection resolves, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Settings for [`crate::service::QuoteService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Artificial delay applied before each selection. Zero disables it.
    pub delay: Duration,
    /// Base seed for reproducible draws; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Behavior when the exclusion set leaves too few quotes.
    pub fallback: ExclusionFallback,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            seed: None,
            fallback: ExclusionFallback::default(),
        }
    }
}

impl ServiceConfig {
    /// Same settings without the artificial delay.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
