use crate::domain::model::{DEFAULT_DELAY_MS, DEFAULT_SENTINEL_PATH};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::env;
use std::time::Duration;

/// Settings for the function handler, read from the Lambda environment.
///
/// The pre-probe delay is not configurable: every invocation waits
/// `DEFAULT_DELAY_MS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub sentinel_path: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            sentinel_path: DEFAULT_SENTINEL_PATH.to_string(),
        }
    }
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            sentinel_path: lookup("SENTINEL_PATH")
                .unwrap_or_else(|| DEFAULT_SENTINEL_PATH.to_string()),
        })
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(DEFAULT_DELAY_MS)
    }
}

impl Validate for HandlerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("sentinel_path", &self.sentinel_path)
    }
}
