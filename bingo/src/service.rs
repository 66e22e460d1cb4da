//! BingoService - connects the bands provider to the UI store
//!
//! Owns the `Store<BingoState>` and is responsible for:
//! - Subscribing to provider state transitions and mirroring them into the Store
//! - Triggering the initial load and user retries

use bingo_common::LoadState;
use bingo_core::BandsProvider;
use bingo_ui::stores::{BingoState, BingoStateStoreExt};
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Created inside the Dioxus component tree because Store<BingoState> is not Send-safe.
#[derive(Clone)]
pub struct BingoService {
    /// Reactive view state
    pub state: Store<BingoState>,
    /// Band data provider, constructed once at the application root
    pub provider: BandsProvider,
}

impl BingoService {
    pub fn new(provider: BandsProvider) -> Self {
        Self {
            state: Store::new(BingoState {
                load_state: provider.state(),
            }),
            provider,
        }
    }

    /// Start the provider subscription and the initial load. Call once.
    pub fn start_subscriptions(&self) {
        self.subscribe_provider_events();
        self.load_initial_data();
    }

    fn subscribe_provider_events(&self) {
        let state = self.state;
        let provider = self.provider.clone();
        let mut rx = provider.subscribe();

        spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(load_state) => apply(&state, load_state),
                    Err(RecvError::Lagged(n)) => {
                        warn!("Missed {} band state updates, resyncing", n);
                        apply(&state, provider.state());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }

    fn load_initial_data(&self) {
        let provider = self.provider.clone();
        spawn(async move {
            provider.ensure_loaded().await;
        });
    }

    /// Reload the bands (retry button)
    pub fn retry(&self) {
        let provider = self.provider.clone();
        spawn(async move {
            provider.retry().await;
        });
    }
}

fn apply(state: &Store<BingoState>, load_state: LoadState) {
    debug!("Band state -> {}", load_state.label());
    state.load_state().set(load_state);
}
