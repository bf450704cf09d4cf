use crate::domain::model::{ExtensionEvent, RegisterRequest};
use crate::utils::error::{GreeterError, Result};
use reqwest::{Client, StatusCode};

pub const EXTENSIONS_API_VERSION: &str = "2020-01-01";
pub const EXTENSION_NAME_HEADER: &str = "Lambda-Extension-Name";
pub const EXTENSION_ID_HEADER: &str = "Lambda-Extension-Identifier";

/// Client for the Lambda Extensions API exposed at `AWS_LAMBDA_RUNTIME_API`.
///
/// `next_event` is a long poll that only returns when Lambda has an event
/// for the extension, so the underlying client is built without a timeout.
#[derive(Debug, Clone)]
pub struct ExtensionsApiClient {
    client: Client,
    base_url: String,
}

impl ExtensionsApiClient {
    pub fn new(runtime_api: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("http://{}/{}/extension", runtime_api, EXTENSIONS_API_VERSION),
        }
    }

    /// Registers for INVOKE and SHUTDOWN and returns the extension identifier.
    pub async fn register(&self, extension_name: &str) -> Result<String> {
        let url = format!("{}/register", self.base_url);
        tracing::debug!("Registering extension '{}' at {}", extension_name, url);

        let response = self
            .client
            .post(&url)
            .header(EXTENSION_NAME_HEADER, extension_name)
            .json(&RegisterRequest::invoke_and_shutdown())
            .send()
            .await?;

        let status = response.status();
        let extension_id = response
            .headers()
            .get(EXTENSION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(GreeterError::ExtensionProtocolError {
                status: status.as_u16(),
                message: format!("register failed: {}", body),
            });
        }

        match extension_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(GreeterError::ExtensionProtocolError {
                status: status.as_u16(),
                message: format!("missing {} header", EXTENSION_ID_HEADER),
            }),
        }
    }

    pub async fn next_event(&self, extension_id: &str) -> Result<ExtensionEvent> {
        let response = self
            .client
            .get(format!("{}/event/next", self.base_url))
            .header(EXTENSION_ID_HEADER, extension_id)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(GreeterError::ExtensionProtocolError {
                status: status.as_u16(),
                message: format!("next event failed: {}", body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EventKind;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_register_returns_identifier() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/2020-01-01/extension/register")
                .header(EXTENSION_NAME_HEADER, "nats-extension")
                .json_body(serde_json::json!({"events": ["INVOKE", "SHUTDOWN"]}));
            then.status(200)
                .header(EXTENSION_ID_HEADER, "ext-123")
                .json_body(serde_json::json!({}));
        });

        let client = ExtensionsApiClient::new(&server.address().to_string());
        let id = client.register("nats-extension").await.unwrap();

        mock.assert();
        assert_eq!(id, "ext-123");
    }

    #[tokio::test]
    async fn test_register_without_identifier_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/2020-01-01/extension/register");
            then.status(200).json_body(serde_json::json!({}));
        });

        let client = ExtensionsApiClient::new(&server.address().to_string());
        let err = client.register("nats-extension").await.unwrap_err();
        assert!(matches!(err, GreeterError::ExtensionProtocolError { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_register_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/2020-01-01/extension/register");
            then.status(403).body("not allowed");
        });

        let client = ExtensionsApiClient::new(&server.address().to_string());
        match client.register("nats-extension").await {
            Err(GreeterError::ExtensionProtocolError { status, message }) => {
                assert_eq!(status, 403);
                assert!(message.contains("not allowed"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_next_event_sends_identifier() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2020-01-01/extension/event/next")
                .header(EXTENSION_ID_HEADER, "ext-123");
            then.status(200)
                .json_body(serde_json::json!({"eventType": "INVOKE", "requestId": "r-1"}));
        });

        let client = ExtensionsApiClient::new(&server.address().to_string());
        let event = client.next_event("ext-123").await.unwrap();

        mock.assert();
        assert_eq!(event.kind(), EventKind::Invoke);
    }

    #[tokio::test]
    async fn test_next_event_bad_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2020-01-01/extension/event/next");
            then.status(200).body("not json");
        });

        let client = ExtensionsApiClient::new(&server.address().to_string());
        let err = client.next_event("ext-123").await.unwrap_err();
        assert!(matches!(err, GreeterError::SerializationError(_)));
    }
}
