//! Error types for pagenav.
//!
//! Only the document-retrieval path returns errors; the detection and
//! inference engines degrade every failure to a negative result.

/// Error type for document retrieval.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The response body is not an HTML document.
    #[error("unsupported content type: {0}")]
    ContentType(String),

    /// Network-level failure (connect, timeout, TLS, ...).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, Error>;
