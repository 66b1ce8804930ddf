use thiserror::Error;

/// Errors from the local key/value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while reading or writing a value
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A structured record could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key contains characters that can't be used as a storage key
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }
}
