#[cfg(feature = "cli")]
pub mod cli;
pub mod extension;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use extension::ExtensionConfig;
pub use lambda::HandlerConfig;
pub use toml_config::TomlConfig;
