use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SENTINEL_PATH: &str = "/tmp/nats-extension.lock";
pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_EXTENSION_NAME: &str = "nats-extension";
pub const DEFAULT_PUBLISH_SUBJECT: &str = "lambda";
pub const DEFAULT_PEER_NATS_URL: &str = "nats://localhost:4222";

/// What the handler found at the sentinel path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentinelStatus {
    Missing,
    NotAFile,
    File { modified: DateTime<Utc> },
}

/// RFC 3339 in UTC, `Z` suffix, fractional seconds only when present.
pub fn render_mtime(modified: &DateTime<Utc>) -> String {
    modified.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub events: Vec<String>,
}

impl RegisterRequest {
    pub fn invoke_and_shutdown() -> Self {
        Self {
            events: vec!["INVOKE".to_string(), "SHUTDOWN".to_string()],
        }
    }
}

/// Body of `GET /2020-01-01/extension/event/next`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionEvent {
    pub event_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub deadline_ms: Option<u64>,
    #[serde(default)]
    pub shutdown_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Invoke,
    Shutdown,
    Unknown(String),
}

impl ExtensionEvent {
    pub fn kind(&self) -> EventKind {
        match self.event_type.as_str() {
            "INVOKE" => EventKind::Invoke,
            "SHUTDOWN" => EventKind::Shutdown,
            other => EventKind::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_mtime_whole_seconds() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(render_mtime(&t), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_render_mtime_keeps_subseconds() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(render_mtime(&t), "2024-01-01T00:00:00.250Z");
    }

    #[test]
    fn test_event_kind() {
        let event: ExtensionEvent = serde_json::from_str(
            r#"{"eventType":"INVOKE","requestId":"abc","deadlineMs":1700000000000}"#,
        )
        .unwrap();
        assert_eq!(event.kind(), EventKind::Invoke);
        assert_eq!(event.request_id.as_deref(), Some("abc"));

        let event: ExtensionEvent =
            serde_json::from_str(r#"{"eventType":"SHUTDOWN","shutdownReason":"spindown"}"#)
                .unwrap();
        assert_eq!(event.kind(), EventKind::Shutdown);

        let event: ExtensionEvent = serde_json::from_str(r#"{"eventType":"RESTORE"}"#).unwrap();
        assert_eq!(event.kind(), EventKind::Unknown("RESTORE".to_string()));
    }

    #[test]
    fn test_register_request_body() {
        let body = serde_json::to_string(&RegisterRequest::invoke_and_shutdown()).unwrap();
        assert_eq!(body, r#"{"events":["INVOKE","SHUTDOWN"]}"#);
    }
}
