use std::time::Duration;

use garde::Validate;
use serde::Deserialize;

/// Polling settings for waiting on a job to reach a terminal status.
///
/// Read from `HYP3_TIMEOUT_SECS` and `HYP3_CHECK_EVERY_SECS`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WaitConfig {
    /// Upper bound on the total wait (default: 3 hours)
    #[serde(default = "default_timeout_secs")]
    #[garde(range(min = 1))]
    pub timeout_secs: u64,

    /// Delay between status fetches (default: 60 seconds)
    #[serde(default = "default_check_every_secs")]
    #[garde(range(min = 1))]
    pub check_every_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10_800
}

fn default_check_every_secs() -> u64 {
    60
}

fn whole_secs(field: &'static str, value: Duration) -> Result<u64, ConfigError> {
    if value.subsec_nanos() != 0 {
        return Err(ConfigError::FractionalSeconds { field, value });
    }
    Ok(value.as_secs())
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            check_every_secs: default_check_every_secs(),
        }
    }
}

impl WaitConfig {
    /// Both durations must be whole seconds.
    pub fn new(timeout: Duration, check_every: Duration) -> Result<Self, ConfigError> {
        let config = Self {
            timeout_secs: whole_secs("timeout", timeout)?,
            check_every_secs: whole_secs("check_every", check_every)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config: Self = envy::prefixed("HYP3_").from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn check_every(&self) -> Duration {
        Duration::from_secs(self.check_every_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] garde::Report),

    #[error("{field} must be a whole number of seconds, got {value:?}")]
    FractionalSeconds { field: &'static str, value: Duration },
}
