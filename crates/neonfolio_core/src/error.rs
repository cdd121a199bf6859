use thiserror::Error;

/// Errors raised while reading configuration or embedded content.
#[derive(Debug, Error)]
pub enum NeonError {
    #[error("unknown theme mode '{0}' (expected system, light or dark)")]
    InvalidThemeMode(String),

    #[error("{key} is not a valid number: '{value}'")]
    InvalidNumber { key: String, value: String },

    #[error("{key} is not a valid boolean: '{value}'")]
    InvalidBool { key: String, value: String },

    #[error("{key} is not a valid URL '{value}': {reason}")]
    InvalidUrl {
        key: String,
        value: String,
        reason: String,
    },

    #[error("{key} uses unsupported scheme '{scheme}'")]
    UnsupportedScheme { key: String, scheme: String },

    #[error("resume content is malformed: {0}")]
    Content(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NeonError>;
