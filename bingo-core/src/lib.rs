//! bingo-core - band loading for Band Shirt Bingo
//!
//! Holds the simulated bands service, the provider that drives the load
//! state machine, and application configuration.

pub mod config;
pub mod fetch;
pub mod provider;
mod time;

pub use config::Config;
pub use fetch::{BandSource, FaultInjection, SimulatedFetch};
pub use provider::BandsProvider;
