//! Query interface consumed by the presentation layer.
//!
//! `QuoteService` wraps an injected, shared [`Catalog`] and answers selection requests
//! after the configured artificial delay. Each request runs on its own short-lived
//! worker thread and hands its result back over a `crossbeam_channel`, so concurrent
//! requests never wait on one another; the catalog is only ever read.
//!
//! Results cross the boundary as [`SelectionResponse`] values. A panic inside a worker
//! is caught and reported as an unexpected failure carrying the panic message.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crossbeam_channel::{Receiver, bounded};
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::config::ServiceConfig;
use crate::error::QuoteError;
use crate::quote::{Quote, QuoteId, SelectionResponse};
use crate::result::Result;
use crate::selector::{SelectionRequest, select};

/// Selection service over a read-only catalog.
pub struct QuoteService {
    catalog: Arc<Catalog>,
    config: ServiceConfig,
    /// Requests issued so far; offsets the base seed so seeded draws differ per call.
    issued: AtomicU64,
}

/// Handle to a selection running on a worker thread.
pub struct PendingSelection {
    category: String,
    rx: Result<Receiver<Result<Vec<Quote>>>>,
}

impl PendingSelection {
    /// Block until the worker answers.
    pub fn wait(self) -> Result<Vec<Quote>> {
        let rx = self.rx?;
        rx.recv()?
    }

    /// Block until the worker answers and convert the outcome into a response.
    pub fn wait_response(self) -> SelectionResponse {
        let category = self.category.clone();
        let result = self.wait();
        if let Err(e) = &result {
            if !e.is_category_not_found() {
                error!("Selection for {} failed: {}", category, e);
            }
        }
        result.into()
    }
}

impl QuoteService {
    /// Create a service over `catalog`.
    pub fn new(catalog: Arc<Catalog>, config: ServiceConfig) -> Self {
        Self {
            catalog,
            config,
            issued: AtomicU64::new(0),
        }
    }

    /// The catalog this service reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Start a selection on a worker thread and return a handle to its result.
    pub fn request(&self, request: SelectionRequest) -> PendingSelection {
        let (tx, rx) = bounded::<Result<Vec<Quote>>>(1);
        let catalog = Arc::clone(&self.catalog);
        let delay = self.config.delay;
        let fallback = self.config.fallback;
        let mut rng = self.next_rng();
        let category = request.category.clone();

        let spawned = thread::Builder::new()
            .name("quote-selection".to_string())
            .spawn(move || {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let result = guarded(|| select(&catalog, &request, fallback, &mut rng));
                if tx.send(result).is_err() {
                    debug!(
                        "Selection for {} finished after its caller stopped waiting",
                        request.category
                    );
                }
            });

        PendingSelection {
            category,
            rx: spawned.map(|_| rx).map_err(|e| {
                QuoteError::Unexpected(format!("failed to start selection worker: {}", e))
            }),
        }
    }

    /// Blocking query: select up to `count` quotes from `category`, avoiding `exclude_ids`.
    pub fn quotes_by_category(
        &self,
        category: &str,
        count: usize,
        exclude_ids: &[QuoteId],
    ) -> SelectionResponse {
        let request = SelectionRequest::new(category)
            .with_count(count)
            .excluding(exclude_ids.iter().copied());
        self.request(request).wait_response()
    }

    /// Category keys in sorted order.
    pub fn available_categories(&self) -> Vec<String> {
        self.catalog
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Number of quotes in `category`; 0 for an unknown key.
    pub fn quote_count(&self, category: &str) -> usize {
        self.catalog.quote_count(category)
    }

    fn next_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => {
                let n = self.issued.fetch_add(1, Ordering::Relaxed);
                StdRng::seed_from_u64(seed.wrapping_add(n))
            }
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Run `f`, turning a panic into `Unexpected` with the panic's message.
fn guarded<F: FnOnce() -> Result<Vec<Quote>>>(f: F) -> Result<Vec<Quote>> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(QuoteError::Unexpected(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "selection worker panicked".to_string()
    }
}
