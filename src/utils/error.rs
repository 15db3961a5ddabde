use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Counter store request failed: {message}")]
    CounterStoreError { message: String },

    #[error("Malformed counter record: {reason}")]
    MalformedRecordError { reason: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    RemoteStore,
    Input,
    System,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ConfigError { .. } | DashboardError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DashboardError::CounterStoreError { .. }
            | DashboardError::MalformedRecordError { .. } => ErrorCategory::RemoteStore,
            DashboardError::ValidationError { .. } => ErrorCategory::Input,
            DashboardError::IoError(_) | DashboardError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Message shown on the terminal when startup aborts.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting for '{}': {}", field, reason)
            }
            DashboardError::ConfigError { message } => format!("Configuration problem: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
