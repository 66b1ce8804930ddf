use serde::{Deserialize, Serialize};

use crate::pokemon_type::PokemonType;
use crate::stats::BaseStats;

/// Canonical, normalized representation of one catalog entry.
///
/// Built once from an upstream payload and never mutated afterwards.
/// Fetching the same id twice within a session yields equal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// National dex number, `1..=CATALOG_SIZE`
    pub id: u32,

    /// Lowercase slug (e.g., "mr-mime")
    pub name: String,

    /// One or two type tags, primary first
    pub types: Vec<PokemonType>,

    pub stats: BaseStats,

    pub sprites: SpriteRefs,

    /// Height in meters (upstream decimeters / 10)
    pub height_m: f64,

    /// Weight in kilograms (upstream hectograms / 10)
    pub weight_kg: f64,

    pub abilities: Vec<Ability>,

    /// Species slug, used to look up alternate forms
    pub species: Option<String>,

    /// Names of the forms listed on the payload
    pub forms: Vec<String>,
}

impl CatalogEntry {
    /// First type tag. Entries always carry at least one.
    pub fn primary_type(&self) -> Option<PokemonType> {
        self.types.first().copied()
    }

    pub fn has_type(&self, t: PokemonType) -> bool {
        self.types.contains(&t)
    }

    /// Best available image: official artwork, then the primary sprite.
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .official_artwork
            .as_deref()
            .or(self.sprites.front.as_deref())
    }
}

/// Named image URLs for an entry. Any of them may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRefs {
    pub front: Option<String>,
    pub front_shiny: Option<String>,
    pub official_artwork: Option<String>,
    pub animated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

/// An alternate form (variety) of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRef {
    pub name: String,
    pub id: u32,
    pub is_default: bool,
}

/// Result of probing an entry for a Gigantamax form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GigantamaxInfo {
    pub has_gigantamax: bool,
    /// Form slug, known only when the upstream payload listed it
    pub gigantamax_name: Option<String>,
}

/// Reference to an entry by dex number or by name slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryRef {
    Id(u32),
    Name(String),
}

impl EntryRef {
    /// Path segment used in API URLs. Names are lowercased.
    pub fn path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Name(name) => name.trim().to_lowercase(),
        }
    }
}

impl std::fmt::Display for EntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<u32> for EntryRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for EntryRef {
    /// Digits parse as an id, anything else is treated as a name.
    fn from(s: &str) -> Self {
        let trimmed = s.trim().trim_start_matches('#');
        match trimmed.parse::<u32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(s.trim().to_lowercase()),
        }
    }
}

impl From<String> for EntryRef {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
