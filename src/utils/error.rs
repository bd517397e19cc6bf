use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConciergeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConciergeError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConciergeError::ConfigError { message } => {
                format!("The configuration could not be used: {}", message)
            }
            ConciergeError::ConfigValidationError { field, message } => {
                format!("The configuration file is malformed ({}): {}", field, message)
            }
            ConciergeError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConciergeError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            ConciergeError::ConfigError { .. } | ConciergeError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with an [assistant] section".to_string()
            }
            ConciergeError::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConciergeError>;
