use crate::adapters::ExtensionsApiClient;
use crate::domain::model::{EventKind, ExtensionEvent};
use crate::domain::ports::EventPublisher;
use crate::utils::error::Result;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

pub const STARTED_MESSAGE: &str = "Extension started";
pub const INVOKED_MESSAGE: &str = "Function invoked";
pub const SHUTDOWN_MESSAGE: &str = "Extension shutting down";

/// The extension side of the sentinel contract: it writes the sentinel file,
/// registers with the Extensions API and reports every lifecycle event to a
/// publisher until Lambda sends SHUTDOWN.
pub struct ExtensionAgent<P: EventPublisher> {
    api: ExtensionsApiClient,
    publisher: P,
    extension_name: String,
    subject: String,
    sentinel_path: PathBuf,
}

impl<P: EventPublisher> ExtensionAgent<P> {
    pub fn new(
        api: ExtensionsApiClient,
        publisher: P,
        extension_name: impl Into<String>,
        subject: impl Into<String>,
        sentinel_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api,
            publisher,
            extension_name: extension_name.into(),
            subject: subject.into(),
            sentinel_path: sentinel_path.into(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        touch_sentinel(&self.sentinel_path).await?;
        tracing::info!("Sentinel written to {}", self.sentinel_path.display());

        let extension_id = self.api.register(&self.extension_name).await?;
        tracing::info!(
            "Extension '{}' registered with id {}",
            self.extension_name,
            extension_id
        );

        self.publish(STARTED_MESSAGE).await;

        loop {
            let event = self.api.next_event(&extension_id).await?;
            if self.handle_event(&event).await.is_break() {
                return Ok(());
            }
        }
    }

    /// Breaks on SHUTDOWN, continues on everything else.
    pub async fn handle_event(&self, event: &ExtensionEvent) -> ControlFlow<()> {
        match event.kind() {
            EventKind::Invoke => {
                tracing::debug!("INVOKE received (request {:?})", event.request_id);
                self.publish(INVOKED_MESSAGE).await;
                ControlFlow::Continue(())
            }
            EventKind::Shutdown => {
                tracing::info!("SHUTDOWN received (reason {:?})", event.shutdown_reason);
                self.publish(SHUTDOWN_MESSAGE).await;
                ControlFlow::Break(())
            }
            EventKind::Unknown(event_type) => {
                tracing::warn!("Received unknown event type: {}", event_type);
                ControlFlow::Continue(())
            }
        }
    }

    // Publish failures never stop the agent.
    async fn publish(&self, payload: &str) {
        if let Err(e) = self.publisher.publish(&self.subject, payload).await {
            tracing::warn!("Failed to publish '{}': {}", payload, e);
        }
    }
}

/// Creates the file, truncating it if it already exists.
pub async fn touch_sentinel(path: &Path) -> Result<()> {
    tokio::fs::File::create(path).await?;
    Ok(())
}
