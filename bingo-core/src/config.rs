use crate::fetch::{FaultInjection, SIMULATED_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Config file looked up in the working directory outside dev mode
pub const CONFIG_FILE_NAME: &str = "bingo.yaml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_fetch_delay_ms() -> u64 {
    SIMULATED_DELAY_MS
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated network delay of the bands service
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
    /// Probability in [0, 1] that a simulated fetch fails. 0 disables fault injection.
    #[serde(default)]
    pub failure_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_delay_ms: SIMULATED_DELAY_MS,
            failure_rate: 0.0,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Dev mode (`BINGO_DEV_MODE` set or a `.env` file present) reads
    /// `BINGO_*` environment variables. Otherwise `bingo.yaml` in the
    /// working directory is used if it exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let dev_mode = std::env::var("BINGO_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Dev mode activated - loading from environment");
            Self::from_env()
        } else {
            Self::load_from_dir(Path::new("."))
        }
    }

    /// Browsers have no environment or working directory; use defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(delay) = env_parse::<u64>("BINGO_FETCH_DELAY_MS") {
            config.fetch_delay_ms = delay;
        }
        if let Some(rate) = env_parse::<f64>("BINGO_FAILURE_RATE") {
            match validate_failure_rate(rate) {
                Ok(rate) => config.failure_rate = rate,
                Err(e) => warn!("Ignoring BINGO_FAILURE_RATE: {}", e),
            }
        }

        config
    }

    /// Read `bingo.yaml` from `dir`, falling back to defaults when it is
    /// missing or invalid.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE_NAME);
        match Self::from_yaml_file(&path) {
            Ok(Some(config)) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Failed to load {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config file. Returns `Ok(None)` if the file does not exist.
    pub fn from_yaml_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map(Some)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        validate_failure_rate(config.failure_rate)?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Fault injection setting for the simulated bands service
    pub fn fault_injection(&self) -> FaultInjection {
        if self.failure_rate <= 0.0 {
            FaultInjection::Never
        } else if self.failure_rate >= 1.0 {
            FaultInjection::Always
        } else {
            FaultInjection::Random(self.failure_rate)
        }
    }
}

fn validate_failure_rate(rate: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::Config(format!(
            "failure_rate must be between 0 and 1, got {}",
            rate
        )))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = std::env::var(key).ok().filter(|s| !s.is_empty())?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring invalid {}={}", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch_delay_ms, 1500);
        assert_eq!(config.fault_injection(), FaultInjection::Never);
    }

    #[test]
    fn test_from_yaml_str() {
        let config = Config::from_yaml_str("fetch_delay_ms: 250\nfailure_rate: 0.25\n").unwrap();
        assert_eq!(config.fetch_delay_ms, 250);
        assert_eq!(config.fault_injection(), FaultInjection::Random(0.25));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::from_yaml_str("failure_rate: 1.0\n").unwrap();
        assert_eq!(config.fetch_delay_ms, 1500);
        assert_eq!(config.fault_injection(), FaultInjection::Always);
    }

    #[test]
    fn test_rejects_out_of_range_failure_rate() {
        let err = Config::from_yaml_str("failure_rate: 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = Config::from_yaml_str("fetch_delay_ms: [").unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            fetch_delay_ms: 10,
            failure_rate: 0.5,
        };
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            config.to_yaml_string().unwrap(),
        )
        .unwrap();

        assert_eq!(Config::load_from_dir(dir.path()), config);
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from_dir(dir.path()), Config::default());
    }

    #[test]
    fn test_load_from_dir_with_invalid_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "failure_rate: -1\n").unwrap();
        assert_eq!(Config::load_from_dir(dir.path()), Config::default());
    }
}
