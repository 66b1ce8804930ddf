//! Local application state for dextrack: the persisted collection, list
//! views over catalog entries, request tokens, and settings.

pub mod browse;
pub mod collection;
pub mod error;
pub mod latest;
pub mod settings;

pub use browse::{EntryFilter, SortOrder, view};
pub use collection::{
    COLLECTION_KEY, CollectionState, CollectionStore, GlobalStats, RECENT_LIMIT, RangeStats,
};
pub use error::{CollectionError, SettingsError};
pub use latest::{RequestGeneration, RequestToken};
pub use settings::{ApiSettings, Settings, StorageSettings, settings_path};
