//! Bands provider - owns the load state machine and notifies observers
//!
//! The provider is constructed once at the application root and handed to
//! whoever needs it. Every transition goes through `load`/`retry`, and each
//! transition is broadcast to subscribers as it happens.
//!
//! A load started while another is in flight supersedes it: the older
//! fetch still completes, but its result is discarded.

use crate::fetch::BandSource;
use bingo_common::{FetchOutcome, LoadMachine, LoadState, RequestId, Resolution};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Handle to the band data provider. Clones share the same state.
#[derive(Clone)]
pub struct BandsProvider {
    source: Arc<dyn BandSource>,
    machine: Arc<Mutex<LoadMachine>>,
    events_tx: broadcast::Sender<LoadState>,
}

impl fmt::Debug for BandsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandsProvider")
            .field("state", &self.state().label())
            .finish_non_exhaustive()
    }
}

/// Two handles are equal when they share state.
impl PartialEq for BandsProvider {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.machine, &other.machine)
    }
}

impl BandsProvider {
    pub fn new(source: Arc<dyn BandSource>) -> Self {
        let (events_tx, _) = broadcast::channel(16);
        Self {
            source,
            machine: Arc::new(Mutex::new(LoadMachine::new())),
            events_tx,
        }
    }

    /// Subscribe to state transitions
    pub fn subscribe(&self) -> broadcast::Receiver<LoadState> {
        self.events_tx.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadState {
        self.machine().state().clone()
    }

    /// Fetch the band list and return the resulting state.
    ///
    /// If a newer load starts before this one finishes, the returned state is
    /// whatever the provider holds at completion, not this fetch's result.
    pub async fn load(&self) -> LoadState {
        let request = self.begin();
        let result = self.source.fetch().await;
        self.complete(FetchOutcome { request, result })
    }

    /// Load again, typically after a failure.
    pub async fn retry(&self) -> LoadState {
        info!("Retrying band load");
        self.load().await
    }

    /// Load unless the bands are already loaded or loading.
    ///
    /// A successful result is kept for the rest of the session. When a load
    /// is already in flight this returns `Loading` immediately.
    pub async fn ensure_loaded(&self) -> LoadState {
        let current = self.state();
        match current {
            LoadState::Success(_) | LoadState::Loading => {
                debug!("Bands already {}, not fetching", current.label());
                current
            }
            LoadState::Idle | LoadState::Failure(_) => self.load().await,
        }
    }

    fn begin(&self) -> RequestId {
        let (request, state) = {
            let mut machine = self.machine();
            let request = machine.begin();
            (request, machine.state().clone())
        };
        info!("Loading bands (request {})", request);
        self.notify(state);
        request
    }

    fn complete(&self, outcome: FetchOutcome) -> LoadState {
        let request = outcome.request;
        let (resolution, state) = {
            let mut machine = self.machine();
            let resolution = machine.resolve(outcome);
            (resolution, machine.state().clone())
        };

        match resolution {
            Resolution::Applied => {
                match &state {
                    LoadState::Success(bands) => {
                        info!("Loaded {} bands (request {})", bands.len(), request)
                    }
                    LoadState::Failure(e) => {
                        warn!("Failed to load bands (request {}): {}", request, e)
                    }
                    _ => {}
                }
                self.notify(state.clone());
            }
            Resolution::Discarded => {
                debug!("Discarding result of superseded request {}", request);
            }
        }

        state
    }

    fn notify(&self, state: LoadState) {
        // No subscribers is fine
        let _ = self.events_tx.send(state);
    }

    fn machine(&self) -> MutexGuard<'_, LoadMachine> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
