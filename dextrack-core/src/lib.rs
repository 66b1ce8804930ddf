//! Shared model for dextrack: catalog entries, the generation table, image
//! URL templates, and the local key/value storage abstraction.

pub mod entry;
pub mod error;
pub mod generation;
pub mod pokemon_type;
pub mod sprites;
pub mod stats;
pub mod storage;
pub mod util;

pub use entry::{Ability, CatalogEntry, EntryRef, FormRef, GigantamaxInfo, SpriteRefs};
pub use error::StorageError;
pub use generation::{
    CATALOG_SIZE, GenerationRange, all_generations, generation_for_id, generation_for_region,
    generation_info,
};
pub use pokemon_type::{PokemonType, TypeParseError};
pub use stats::{BaseStats, StatName};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, load_json_or_default, save_json};
