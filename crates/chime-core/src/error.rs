//! Error types for chime-core.

use thiserror::Error;

/// Result type alias using chime-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for chime operations
#[derive(Error, Debug)]
pub enum Error {
    // Host API errors
    #[error("Host API error: {0}")]
    HostApi(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    // Desktop integration errors
    #[error("No notification backend found. Install osascript or notify-send.")]
    NotifierNotFound,

    #[error("No URL opener found. Install open or xdg-open.")]
    OpenerNotFound,

    // Config errors
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}
