use thiserror::Error;

/// Errors building, encoding or decoding protocol messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("subscribe request needs an account or a uuid")]
    MissingSubscriber,

    #[error("subscribe request carries both an account and a uuid")]
    AmbiguousSubscriber,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
