use thiserror::Error;

use hearth_model::ModelError;

/// Errors from storage engine operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A persisted record names a variant outside the registered set.
    #[error("unknown variant {kind:?} in record {key:?}")]
    UnknownVariant { kind: String, key: String },

    /// A persisted record lacks the `__class__` discriminator.
    #[error("record {key:?} is missing its discriminator")]
    MissingDiscriminator { key: String },

    /// The backing file is not a mapping of keys to attribute records.
    #[error("malformed store document: {0}")]
    MalformedDocument(String),

    /// Failure serializing the registry for a save.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// `persist` was asked for a key the registry does not hold.
    #[error("no entity registered under key {0:?}")]
    NotFound(String),

    /// Attribute conversion failed (includes malformed timestamps).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// I/O error from the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
