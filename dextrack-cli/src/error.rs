use thiserror::Error;

use dextrack_api::{CatalogError, FetchError};
use dextrack_core::StorageError;
use dextrack_lib::{CollectionError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog lookup failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// HTTP client could not be built
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// Collection change rejected or not persisted
    #[error("{0}")]
    Collection(#[from] CollectionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Bad command-line value
    #[error("{0}")]
    Usage(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
