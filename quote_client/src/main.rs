//! Quote Client — a terminal consumer of the quote selector. It loads a catalog (the
//! bundled one or a JSON file), answers one-off selections, lists categories, and can
//! keep refreshing a category while avoiding the quotes it showed last time.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client get --category wisdom --count 2
//! quote_client --catalog ./quotes.json watch --category funny --interval-ms 5000
//! ```
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` to see each draw.
#![warn(missing_docs)]
mod args;
mod error;
mod render;
mod result;

use crate::args::{Args, Command};
use crate::result::Result;
use clap::Parser;
use crossbeam_channel::{RecvTimeoutError, bounded};
use log::{error, info};
use quote_selector::{Catalog, QuoteId, QuoteService, RefreshHistory, ServiceConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute the parsed command. `Ok(false)` means the command ran but its selection failed.
fn run(args: Args) -> Result<bool> {
    let catalog = match &args.catalog {
        Some(raw) => Catalog::from_path(catalog_path(raw))?,
        None => Catalog::builtin()?,
    };
    let config = ServiceConfig {
        delay: Duration::from_millis(args.delay_ms),
        seed: args.seed,
        fallback: args.fallback,
    };
    let service = QuoteService::new(Arc::new(catalog), config);

    match args.command {
        Command::Get {
            category,
            count,
            exclude,
            json,
        } => get_once(&service, &category, count, &exclude, json),
        Command::Categories => {
            render::write_categories(&mut io::stdout().lock(), &service)?;
            Ok(true)
        }
        Command::Watch {
            category,
            count,
            interval_ms,
            refreshes,
            json,
        } => watch(
            &service,
            &category,
            count,
            Duration::from_millis(interval_ms),
            refreshes,
            json,
        ),
    }
}

fn get_once(
    service: &QuoteService,
    category: &str,
    count: usize,
    exclude: &[QuoteId],
    json: bool,
) -> Result<bool> {
    let response = service.quotes_by_category(category, count, exclude);
    let mut out = io::stdout().lock();
    if json {
        render::write_json_line(&mut out, &response)?;
    } else {
        render::write_response(&mut out, &mut io::stderr().lock(), &response)?;
    }
    Ok(response.success)
}

/// Refresh `category` until the budget is spent or Ctrl+C arrives.
///
/// A failed refresh is shown and the loop carries on; the next refresh is a new request.
fn watch(
    service: &QuoteService,
    category: &str,
    count: usize,
    interval: Duration,
    refreshes: Option<u32>,
    json: bool,
) -> Result<bool> {
    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Stopping refreshes...");
        let _ = shutdown_tx.try_send(());
    })?;

    let mut history = RefreshHistory::new();
    let mut done = 0u32;
    let mut all_ok = true;

    info!("Watching {}. Press Ctrl+C to exit.", category);
    loop {
        let response = service
            .request(history.next_request(category, count))
            .wait_response();
        history.record(category, &response);
        all_ok &= response.success;
        done += 1;

        {
            let mut out = io::stdout().lock();
            if json {
                render::write_json_line(&mut out, &response)?;
            } else {
                writeln!(out, "-- refresh {} --", done)?;
                render::write_response(&mut out, &mut io::stderr().lock(), &response)?;
            }
            out.flush()?;
        }

        if refreshes.is_some_and(|limit| done >= limit) {
            break;
        }
        match shutdown_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!("Watch stopped after {} refreshes", done);
    Ok(all_ok)
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Path given to `--catalog`, with surrounding whitespace and double quotes removed.
///
/// Shells on Windows often pass quoted paths through verbatim.
fn catalog_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches('"'))
}
