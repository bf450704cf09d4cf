use crate::domain::model::SentinelStatus;
use crate::utils::error::Result;
use std::path::Path;

/// Reports what sits at a filesystem path. A missing path is `Ok(Missing)`,
/// never an error.
pub trait SentinelProbe: Send + Sync {
    fn probe(&self, path: &Path) -> impl std::future::Future<Output = Result<SentinelStatus>> + Send;
}

/// Sink for extension lifecycle messages.
pub trait EventPublisher: Send + Sync {
    fn publish(
        &self,
        subject: &str,
        payload: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
