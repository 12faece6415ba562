/// Errors from the pure catalog and submission logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input broke a schema or form rule. The message is user-facing.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// JSON could not be parsed or rendered.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
