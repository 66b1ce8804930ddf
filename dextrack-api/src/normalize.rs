//! Conversion of upstream payloads into [`CatalogEntry`] values.

use dextrack_core::util::id_from_resource_url;
use dextrack_core::{
    Ability, BaseStats, CatalogEntry, FormRef, PokemonType, SpriteRefs, StatName,
};

use crate::types::{RawPokemon, RawSpecies};

/// Why a payload could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("expected 1 or 2 types, found {0}")]
    TypeCount(usize),

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("missing stat '{0}'")]
    MissingStat(&'static str),

    #[error("stat '{stat}' out of range: {value}")]
    StatOutOfRange { stat: &'static str, value: u32 },
}

/// Build a [`CatalogEntry`] from an entry payload.
///
/// Types are ordered by slot. Official artwork falls back to the front
/// sprite. Height and weight are converted from decimetres and hectograms.
pub fn normalize(raw: RawPokemon) -> Result<CatalogEntry, NormalizeError> {
    let mut slots = raw.types;
    slots.sort_by_key(|s| s.slot);
    if slots.is_empty() || slots.len() > 2 {
        return Err(NormalizeError::TypeCount(slots.len()));
    }
    let types = slots
        .iter()
        .map(|s| {
            s.kind
                .name
                .parse::<PokemonType>()
                .map_err(|_| NormalizeError::UnknownType(s.kind.name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut stats = BaseStats::default();
    for &stat in StatName::all() {
        let value = raw
            .stats
            .iter()
            .find(|s| s.stat.name == stat.key())
            .map(|s| s.base_stat)
            .ok_or(NormalizeError::MissingStat(stat.key()))?;
        let value = u8::try_from(value)
            .ok()
            .filter(|v| *v >= 1)
            .ok_or(NormalizeError::StatOutOfRange {
                stat: stat.key(),
                value,
            })?;
        stats.set(stat, value);
    }

    let front = raw.sprites.front_default.clone();
    let sprites = SpriteRefs {
        official_artwork: raw
            .sprites
            .official_artwork()
            .map(str::to_string)
            .or_else(|| front.clone()),
        animated: raw.sprites.animated().map(str::to_string),
        front_shiny: raw.sprites.front_shiny.clone(),
        front,
    };

    let mut ability_slots = raw.abilities;
    ability_slots.sort_by_key(|a| a.slot);
    let abilities = ability_slots
        .into_iter()
        .map(|a| Ability {
            name: a.ability.name,
            is_hidden: a.is_hidden,
        })
        .collect();

    Ok(CatalogEntry {
        id: raw.id,
        name: raw.name.to_lowercase(),
        types,
        stats,
        sprites,
        height_m: f64::from(raw.height) / 10.0,
        weight_kg: f64::from(raw.weight) / 10.0,
        abilities,
        species: raw.species.map(|s| s.name),
        forms: raw.forms.into_iter().map(|f| f.name).collect(),
    })
}

/// Alternate forms listed on a species payload, in upstream order.
///
/// Returns an empty list unless the species has more than one variety.
/// Varieties whose URL carries no numeric id are skipped.
pub fn species_forms(species: &RawSpecies) -> Vec<FormRef> {
    if species.varieties.len() <= 1 {
        return Vec::new();
    }
    species
        .varieties
        .iter()
        .filter_map(|v| {
            Some(FormRef {
                name: v.pokemon.name.clone(),
                id: id_from_resource_url(&v.pokemon.url)?,
                is_default: v.is_default,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
