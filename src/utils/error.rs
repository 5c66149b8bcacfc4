use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Course API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed padded-JSON payload: {message}")]
    PayloadError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Payload,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BadgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BadgeError::ApiError(_) => ErrorCategory::Network,
            BadgeError::PayloadError { .. } | BadgeError::SerializationError(_) => {
                ErrorCategory::Payload
            }
            BadgeError::ConfigError { .. }
            | BadgeError::InvalidConfigValueError { .. }
            | BadgeError::MissingConfigError { .. } => ErrorCategory::Config,
            BadgeError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Payload => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BadgeError::ApiError(e) => {
                format!("Could not reach the course API: {}", e)
            }
            BadgeError::PayloadError { message } => {
                format!("The course API returned an unexpected response: {}", message)
            }
            BadgeError::SerializationError(e) => {
                format!("The course data could not be parsed: {}", e)
            }
            BadgeError::IoError(e) => format!("Could not write the badge page: {}", e),
            BadgeError::ConfigError { message } => format!("Configuration problem: {}", message),
            BadgeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            BadgeError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and the --endpoint value, then run again".to_string()
            }
            ErrorCategory::Payload => {
                "Verify the user id exists and that the endpoint serves padded JSON (JSONP)"
                    .to_string()
            }
            ErrorCategory::Config => {
                "Run with --help to see the expected flags and config file format".to_string()
            }
            ErrorCategory::Io => "Check that the output path exists and is writable".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BadgeError>;
