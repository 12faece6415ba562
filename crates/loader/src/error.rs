use promptography_core::error::CoreError;

/// Errors from fetching or parsing a catalog document.
///
/// Every variant is recoverable: callers fall back to the demo catalog
/// (see [`crate::load::load_or_demo`]) or show an error panel with a retry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading a local catalog file failed.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Catalog fetch failed ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The document is not valid JSON or does not match the entry schema.
    #[error("Malformed catalog document: {0}")]
    Parse(serde_json::Error),

    /// The document parsed but breaks a catalog invariant.
    #[error("Invalid catalog document: {0}")]
    Invalid(String),
}

impl From<CoreError> for LoadError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Serialization(e) => Self::Parse(e),
            CoreError::Validation(msg) => Self::Invalid(msg),
        }
    }
}
