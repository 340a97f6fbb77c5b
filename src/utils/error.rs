use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Business {id} not found")]
    NotFound { id: i64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BrowserError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BrowserError::ApiError(_) => ErrorCategory::Network,
            BrowserError::SerializationError(_) | BrowserError::NotFound { .. } => {
                ErrorCategory::Data
            }
            BrowserError::UrlError(_)
            | BrowserError::ConfigError { .. }
            | BrowserError::InvalidConfigValueError { .. }
            | BrowserError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BrowserError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BrowserError::NotFound { .. } => ErrorSeverity::Low,
            BrowserError::ApiError(_) | BrowserError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            BrowserError::UrlError(_)
            | BrowserError::ConfigError { .. }
            | BrowserError::InvalidConfigValueError { .. }
            | BrowserError::MissingConfigError { .. } => ErrorSeverity::High,
            BrowserError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BrowserError::ApiError(e) if e.is_timeout() => {
                "The directory service did not answer in time".to_string()
            }
            BrowserError::ApiError(e) if e.is_status() => match e.status() {
                Some(status) => format!("The directory service answered with HTTP {}", status),
                None => "The directory service rejected the request".to_string(),
            },
            BrowserError::ApiError(_) => "Could not reach the directory service".to_string(),
            BrowserError::SerializationError(_) => {
                "The directory service returned data in an unexpected format".to_string()
            }
            BrowserError::NotFound { id } => format!("No business with id {}", id),
            BrowserError::UrlError(e) => format!("The configured address is not valid: {}", e),
            BrowserError::IoError(e) => format!("File operation failed: {}", e),
            BrowserError::ConfigError { message } => format!("Configuration problem: {}", message),
            BrowserError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            BrowserError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the backend is running and --base-url points at it"
            }
            ErrorCategory::Data => "Check the business id or the backend version",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::System => "Check file permissions and free disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
