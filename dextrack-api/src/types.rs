//! Upstream payload shapes.
//!
//! Only the fields the client reads are modeled. Cached payloads are stored
//! in this trimmed form, so these derive `Serialize` as well.

use serde::{Deserialize, Serialize};

/// `{name, url}` reference to another upstream resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paged listing, e.g. `/pokemon?limit=1025`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNamedList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<RawNamedResource>,
}

/// Entry payload from `/pokemon/{idOrName}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub sprites: RawSprites,
    #[serde(default)]
    pub species: Option<RawNamedResource>,
    #[serde(default)]
    pub forms: Vec<RawNamedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: RawNamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: RawNamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: RawNamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<RawOtherSprites>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<RawSpriteVersions>,
}

impl RawSprites {
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }

    /// Animated sprite from the Black/White set.
    pub fn animated(&self) -> Option<&str> {
        self.versions
            .as_ref()?
            .generation_v
            .as_ref()?
            .black_white
            .as_ref()?
            .animated
            .as_ref()?
            .front_default
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOtherSprites {
    #[serde(
        rename = "official-artwork",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub official_artwork: Option<RawFrontSprite>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSpriteVersions {
    #[serde(
        rename = "generation-v",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub generation_v: Option<RawGenerationV>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGenerationV {
    #[serde(rename = "black-white", default, skip_serializing_if = "Option::is_none")]
    pub black_white: Option<RawBlackWhite>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBlackWhite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<RawFrontSprite>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFrontSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Species payload from `/pokemon-species/{idOrName}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub varieties: Vec<RawVariety>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVariety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: RawNamedResource,
}
