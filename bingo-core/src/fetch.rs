//! Simulated bands service
//!
//! Stands in for a `GET` returning the band list: waits a fixed delay, then
//! returns a copy of the catalog. A fault injection hook lets tests and dev
//! builds exercise the failure path.

use crate::config::Config;
use crate::time::sleep_ms;
use async_trait::async_trait;
use bingo_common::{catalog, BandList, FetchError};
use rand::Rng;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Default simulated network delay
pub const SIMULATED_DELAY_MS: u64 = 1500;

/// Message carried by injected failures
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch bands data";

/// Anything that can produce the band list.
///
/// Each call is an independent, single-shot request.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BandSource: Send + Sync {
    async fn fetch(&self) -> Result<BandList, FetchError>;
}

/// When a simulated fetch should fail
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FaultInjection {
    #[default]
    Never,
    Always,
    /// Fail with the given probability in [0, 1]
    Random(f64),
}

impl FaultInjection {
    fn should_fail(&self) -> bool {
        match *self {
            FaultInjection::Never => false,
            FaultInjection::Always => true,
            FaultInjection::Random(p) => rand::thread_rng().gen_bool(p.clamp(0.0, 1.0)),
        }
    }
}

/// In-process stand-in for the bands endpoint
#[derive(Debug)]
pub struct SimulatedFetch {
    delay_ms: u64,
    catalog: BandList,
    fault: Mutex<FaultInjection>,
}

impl SimulatedFetch {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            catalog: catalog(),
            fault: Mutex::new(FaultInjection::Never),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fetch_delay_ms).with_fault(config.fault_injection())
    }

    /// Serve a different list instead of the built-in catalog.
    pub fn with_catalog(mut self, catalog: BandList) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_fault(self, fault: FaultInjection) -> Self {
        self.set_fault(fault);
        self
    }

    /// Change fault injection for subsequent fetches.
    pub fn set_fault(&self, fault: FaultInjection) {
        *self.fault.lock().unwrap_or_else(PoisonError::into_inner) = fault;
    }

    pub fn fault(&self) -> FaultInjection {
        *self.fault.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Default for SimulatedFetch {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY_MS)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BandSource for SimulatedFetch {
    async fn fetch(&self) -> Result<BandList, FetchError> {
        debug!("Simulated fetch started ({}ms delay)", self.delay_ms);
        sleep_ms(self.delay_ms).await;

        if self.fault().should_fail() {
            warn!("Simulated fetch failed (fault injection)");
            return Err(FetchError::FetchFailed(FETCH_FAILED_MESSAGE.to_string()));
        }

        Ok(self.catalog.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_injection_extremes() {
        assert!(!FaultInjection::Never.should_fail());
        assert!(FaultInjection::Always.should_fail());
        assert!(!FaultInjection::Random(0.0).should_fail());
        assert!(FaultInjection::Random(1.0).should_fail());
    }

    #[test]
    fn test_out_of_range_probability_is_clamped() {
        assert!(FaultInjection::Random(7.0).should_fail());
        assert!(!FaultInjection::Random(-1.0).should_fail());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            fetch_delay_ms: 42,
            failure_rate: 1.0,
        };
        let fetch = SimulatedFetch::from_config(&config);
        assert_eq!(fetch.delay_ms(), 42);
        assert_eq!(fetch.fault(), FaultInjection::Always);
    }

    #[test]
    fn test_set_fault() {
        let fetch = SimulatedFetch::default().with_fault(FaultInjection::Always);
        fetch.set_fault(FaultInjection::Never);
        assert_eq!(fetch.fault(), FaultInjection::Never);
    }
}
