use crate::domain::model::{
    DEFAULT_EXTENSION_NAME, DEFAULT_PEER_NATS_URL, DEFAULT_PUBLISH_SUBJECT, DEFAULT_SENTINEL_PATH,
};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_authority, validate_nats_url, validate_non_empty_string, validate_path,
    validate_required_field, Validate,
};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    pub runtime_api: String,
    pub extension_name: String,
    pub sentinel_path: String,
    pub publish_subject: String,
    pub peer_nats_url: String,
}

impl ExtensionConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let runtime_api = lookup("AWS_LAMBDA_RUNTIME_API").filter(|v| !v.is_empty());
        let runtime_api = validate_required_field("AWS_LAMBDA_RUNTIME_API", &runtime_api)?;

        Ok(Self {
            runtime_api: runtime_api.clone(),
            extension_name: lookup("EXTENSION_NAME")
                .unwrap_or_else(|| DEFAULT_EXTENSION_NAME.to_string()),
            sentinel_path: lookup("SENTINEL_PATH")
                .unwrap_or_else(|| DEFAULT_SENTINEL_PATH.to_string()),
            publish_subject: lookup("PUBLISH_SUBJECT")
                .unwrap_or_else(|| DEFAULT_PUBLISH_SUBJECT.to_string()),
            peer_nats_url: lookup("PEER_NATS_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PEER_NATS_URL.to_string()),
        })
    }
}

impl Validate for ExtensionConfig {
    fn validate(&self) -> Result<()> {
        validate_authority("runtime_api", &self.runtime_api)?;
        validate_non_empty_string("extension_name", &self.extension_name)?;
        validate_path("sentinel_path", &self.sentinel_path)?;
        validate_non_empty_string("publish_subject", &self.publish_subject)?;
        validate_nats_url("peer_nats_url", &self.peer_nats_url)?;

        tracing::debug!("Extension configuration validation passed");
        Ok(())
    }
}
