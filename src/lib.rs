pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ExtensionsApiClient, FsProbe, NatsPublisher};
pub use config::{ExtensionConfig, HandlerConfig, TomlConfig};
pub use crate::core::{extension::ExtensionAgent, greeting::GreetingHandler};
pub use domain::model::SentinelStatus;
pub use utils::error::{GreeterError, Result};
