use crate::domain::ports::EventPublisher;
use crate::utils::error::{GreeterError, Result};

/// Publishes lifecycle messages to a NATS server.
#[derive(Debug, Clone)]
pub struct NatsPublisher {
    client: async_nats::Client,
}

impl NatsPublisher {
    pub async fn connect(url: &str) -> Result<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|e| GreeterError::NatsError {
                message: format!("failed to connect to {}: {}", url, e),
            })?;
        tracing::info!("Connected to NATS at {}", url);
        Ok(Self { client })
    }
}

impl EventPublisher for NatsPublisher {
    async fn publish(&self, subject: &str, payload: &str) -> Result<()> {
        self.client
            .publish(subject.to_string(), payload.to_string().into())
            .await
            .map_err(|e| GreeterError::NatsError {
                message: format!("publish to '{}' failed: {}", subject, e),
            })?;
        // The extension may be frozen right after this; push the message out now.
        self.client
            .flush()
            .await
            .map_err(|e| GreeterError::NatsError {
                message: format!("flush failed: {}", e),
            })?;
        tracing::debug!(subject, payload, "published to NATS");
        Ok(())
    }
}
