use crate::config::lambda::HandlerConfig;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sentinel-greeter")]
#[command(about = "Run one local invocation of the sentinel greeting handler")]
pub struct CliConfig {
    #[arg(long, help = "Path of the sentinel file [default: /tmp/nats-extension.lock]")]
    pub sentinel_path: Option<String>,

    #[arg(long, help = "TOML file with a [handler] section")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then explicit flags.
    pub fn resolve(&self) -> Result<HandlerConfig> {
        let mut handler = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.apply_to(HandlerConfig::default()),
            None => HandlerConfig::default(),
        };

        if let Some(path) = &self.sentinel_path {
            handler.sentinel_path = path.clone();
        }

        Ok(handler)
    }
}
