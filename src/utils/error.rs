use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Extensions API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("NATS error: {message}")]
    NatsError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extensions API returned {status}: {message}")]
    ExtensionProtocolError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Network,
    Configuration,
    Protocol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GreeterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Filesystem,
            Self::ApiError(_) | Self::NatsError { .. } => ErrorCategory::Network,
            Self::SerializationError(_) | Self::ExtensionProtocolError { .. } => {
                ErrorCategory::Protocol
            }
            Self::TomlError(_)
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Protocol | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Filesystem => {
                "Check that the sentinel path is readable by the function's user"
            }
            ErrorCategory::Network => {
                "Check that AWS_LAMBDA_RUNTIME_API and PEER_NATS_URL are reachable"
            }
            ErrorCategory::Protocol => {
                "Check the Extensions API version and the extension registration"
            }
            ErrorCategory::Configuration => {
                "Check environment variables, CLI flags and the config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the sentinel file: {}", e),
            Self::MissingConfigError { field } => format!("{} must be set", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
