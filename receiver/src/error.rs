//! Error types for the receiver

use std::time::Duration;
use thiserror::Error;

/// Result type alias for receiver operations
pub type Result<T> = std::result::Result<T, ReceiverError>;

/// Main error type for the receiver
#[derive(Error, Debug)]
pub enum ReceiverError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// An alertmanager base URL (or a joined endpoint URL) failed to parse
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// A configured static header could not be converted to an HTTP header
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// SRV lookup failure
    #[error("SRV lookup failed: {0}")]
    Resolve(#[from] hickory_resolver::error::ResolveError),

    /// SRV lookup exceeded its deadline
    #[error("SRV lookup timed out after {0:?}")]
    ResolveTimeout(Duration),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Alert payload serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Metrics registration error
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// gRPC transport error
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS identity error (unreadable or unusable cert/key material)
    #[error("TLS error: {0}")]
    Tls(String),
}
