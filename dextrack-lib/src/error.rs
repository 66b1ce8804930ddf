use thiserror::Error;

use dextrack_core::StorageError;

/// Errors from collection-state operations.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Favorites must be a subset of owned entries
    #[error("#{0} is not owned; only owned entries can be favorited")]
    NotOwned(u32),

    /// Generation number outside the static table
    #[error("Unknown generation: {0}")]
    UnknownGeneration(u8),

    /// The backing store failed to persist the change
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
