//! Error types for the video replication MCP server.

use thiserror::Error;

/// Library-level error type.
///
/// Every variant renders to the text placed in a failure envelope, so the
/// `Display` output is what the assistant ends up reading.
#[derive(Error, Debug)]
pub enum VideoMcpError {
    #[error("Invalid arguments: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success HTTP status from the upstream API.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid response from API (HTTP {status}): {reason}")]
    InvalidResponse { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VideoMcpError {
    /// Error raised when no credential is available for the upstream API.
    pub fn missing_api_key() -> Self {
        Self::Config("API key not configured, set the VIDEO_API_KEY environment variable".to_string())
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, VideoMcpError>;
