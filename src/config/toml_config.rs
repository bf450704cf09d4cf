use crate::config::lambda::HandlerConfig;
use crate::utils::error::{GreeterError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional file form of the handler settings:
///
/// ```toml
/// [handler]
/// sentinel_path = "/tmp/nats-extension.lock"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub handler: Option<HandlerSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerSection {
    pub sentinel_path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GreeterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Fields present in the file replace the ones in `base`.
    pub fn apply_to(&self, mut base: HandlerConfig) -> HandlerConfig {
        if let Some(path) = self.handler.as_ref().and_then(|h| h.sentinel_path.as_ref()) {
            base.sentinel_path = path.clone();
        }
        base
    }
}
