use crate::domain::model::{render_mtime, SentinelStatus};
use crate::domain::ports::SentinelProbe;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Duration;

pub const GREETING_PREFIX: &str = "Hello from Lambda!";

/// Waits, looks at the sentinel file and answers with a greeting.
///
/// Holds no state between invocations. Only a successful probe of a regular
/// file is logged; a missing path is a normal answer and an I/O fault is
/// returned to the caller untouched.
pub struct GreetingHandler<P: SentinelProbe> {
    probe: P,
    sentinel_path: PathBuf,
    delay: Duration,
}

impl<P: SentinelProbe> GreetingHandler<P> {
    pub fn new(probe: P, sentinel_path: impl Into<PathBuf>, delay: Duration) -> Self {
        Self {
            probe,
            sentinel_path: sentinel_path.into(),
            delay,
        }
    }

    pub async fn invoke(&self) -> Result<String> {
        tokio::time::sleep(self.delay).await;

        match self.probe.probe(&self.sentinel_path).await? {
            SentinelStatus::File { modified } => {
                let message = format!(
                    "{}, the file {} was last modified at {}",
                    GREETING_PREFIX,
                    self.sentinel_path.display(),
                    render_mtime(&modified)
                );
                tracing::info!("{}", message);
                Ok(message)
            }
            SentinelStatus::NotAFile => {
                tracing::debug!(
                    "{} exists but is not a regular file",
                    self.sentinel_path.display()
                );
                Ok(self.missing_message())
            }
            SentinelStatus::Missing => Ok(self.missing_message()),
        }
    }

    fn missing_message(&self) -> String {
        format!(
            "{}, the file {} does not exist",
            GREETING_PREFIX,
            self.sentinel_path.display()
        )
    }
}
