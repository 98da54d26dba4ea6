//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use quote_selector::config::DEFAULT_DELAY_MS;
use quote_selector::{DEFAULT_COUNT, ExclusionFallback, QuoteId};

/// Pause between refreshes in `watch` mode, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON catalog file. The bundled catalog is used when omitted.
    #[clap(long, global = true)]
    pub catalog: Option<String>,

    /// Simulated latency before each selection resolves, in milliseconds.
    #[clap(long, global = true, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Seed for reproducible selections.
    #[clap(long, global = true)]
    pub seed: Option<u64>,

    /// Behavior when the exclusion list leaves too few quotes.
    #[clap(long, global = true, value_enum, default_value_t = ExclusionFallback::IgnoreExclusions)]
    pub fallback: ExclusionFallback,

    #[command(subcommand)]
    pub command: Command,
}

/// Client subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one batch of quotes from a category.
    Get {
        /// Category key, e.g. `wisdom`.
        #[clap(long)]
        category: String,

        /// Number of quotes to return.
        #[clap(long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Quote ids to avoid, separated by commas. Ids may be negative.
        #[clap(long, value_delimiter = ',', allow_hyphen_values = true)]
        exclude: Vec<QuoteId>,

        /// Print the raw `{success, quotes, error}` response as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List categories with their quote counts.
    Categories,

    /// Refresh a category repeatedly, avoiding the quotes shown last time.
    Watch {
        /// Category key, e.g. `funny`.
        #[clap(long)]
        category: String,

        /// Number of quotes per refresh.
        #[clap(long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Pause between refreshes, in milliseconds.
        #[clap(long, default_value_t = DEFAULT_INTERVAL_MS)]
        interval_ms: u64,

        /// Stop after this many refreshes instead of waiting for Ctrl+C.
        #[clap(long)]
        refreshes: Option<u32>,

        /// Print each response as a line of JSON.
        #[clap(long)]
        json: bool,
    },
}
