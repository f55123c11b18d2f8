use thiserror::Error;

#[derive(Error, Debug)]
pub enum XpError {
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

    #[error("Invalid input '{value}' for {field}: {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },
}

impl XpError {
    /// Short message suitable for printing straight to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            XpError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            XpError::SerializationError(e) => format!("Could not format the result: {}", e),
            XpError::ConfigError { message } => format!("Configuration problem: {}", message),
            XpError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            XpError::InvalidInputError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            XpError::ConfigError { .. } | XpError::InvalidConfigValueError { .. } => 1,
            XpError::InvalidInputError { .. } => 2,
            XpError::IoError(_) | XpError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, XpError>;
