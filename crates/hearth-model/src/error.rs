use thiserror::Error;

/// Errors from model attribute conversion.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The attribute record does not fit the variant schema. Malformed
    /// timestamps surface here as well, via the canonical-form parser.
    #[error("malformed attribute record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The variant did not serialize to a JSON object.
    #[error("{kind} did not produce an attribute record")]
    NotARecord { kind: &'static str },
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
