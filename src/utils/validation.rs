use crate::utils::error::{GreeterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GreeterError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The runtime API is given as a bare `host:port` authority, without scheme.
pub fn validate_authority(field_name: &str, authority: &str) -> Result<()> {
    validate_non_empty_string(field_name, authority)?;

    let invalid = |reason: String| GreeterError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: authority.to_string(),
        reason,
    };

    if authority.contains("://") || authority.contains('/') {
        return Err(invalid("Expected host:port without scheme or path".to_string()));
    }

    let url = Url::parse(&format!("http://{}", authority))
        .map_err(|e| invalid(format!("Invalid host:port: {}", e)))?;

    if url.host_str().is_none() {
        return Err(invalid("Missing host".to_string()));
    }

    Ok(())
}

pub fn validate_nats_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| GreeterError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "nats" | "tls" | "ws" | "wss" => Ok(()),
        scheme => Err(invalid(format!("Unsupported NATS URL scheme: {}", scheme))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("sentinel_path", "/tmp/nats-extension.lock").is_ok());
        assert!(validate_path("sentinel_path", "").is_err());
        assert!(validate_path("sentinel_path", "/tmp/a\0b").is_err());
    }

    #[test]
    fn test_validate_authority() {
        assert!(validate_authority("runtime_api", "127.0.0.1:9001").is_ok());
        assert!(validate_authority("runtime_api", "localhost:9001").is_ok());
        assert!(validate_authority("runtime_api", "").is_err());
        assert!(validate_authority("runtime_api", "http://127.0.0.1:9001").is_err());
        assert!(validate_authority("runtime_api", "127.0.0.1:9001/2020-01-01").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("AWS_LAMBDA_RUNTIME_API", &missing),
            Err(GreeterError::MissingConfigError { .. })
        ));
        let present = Some("x".to_string());
        assert_eq!(validate_required_field("f", &present).unwrap(), "x");
    }

    #[test]
    fn test_validate_nats_url() {
        assert!(validate_nats_url("peer_nats_url", "nats://localhost:4222").is_ok());
        assert!(validate_nats_url("peer_nats_url", "tls://nats.internal:4222").is_ok());
        assert!(validate_nats_url("peer_nats_url", "http://localhost:4222").is_err());
        assert!(validate_nats_url("peer_nats_url", "localhost").is_err());
    }
}
