use serde::{Deserialize, Serialize};

/// Elemental type tags. Every catalog entry carries one or two of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// All type variants in the upstream API's canonical order.
const ALL_TYPES: &[PokemonType] = &[
    PokemonType::Normal,
    PokemonType::Fire,
    PokemonType::Water,
    PokemonType::Electric,
    PokemonType::Grass,
    PokemonType::Ice,
    PokemonType::Fighting,
    PokemonType::Poison,
    PokemonType::Ground,
    PokemonType::Flying,
    PokemonType::Psychic,
    PokemonType::Bug,
    PokemonType::Rock,
    PokemonType::Ghost,
    PokemonType::Dragon,
    PokemonType::Dark,
    PokemonType::Steel,
    PokemonType::Fairy,
];

impl PokemonType {
    /// Lowercase slug as used by the remote API (`"fire"`, `"psychic"`).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Badge color (hex) used when rendering the type tag.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Normal => "#A8A878",
            Self::Fire => "#F08030",
            Self::Water => "#6890F0",
            Self::Electric => "#F8D030",
            Self::Grass => "#78C850",
            Self::Ice => "#98D8D8",
            Self::Fighting => "#C03028",
            Self::Poison => "#A040A0",
            Self::Ground => "#E0C068",
            Self::Flying => "#A890F0",
            Self::Psychic => "#F85888",
            Self::Bug => "#A8B820",
            Self::Rock => "#B8A038",
            Self::Ghost => "#705898",
            Self::Dragon => "#7038F8",
            Self::Dark => "#705848",
            Self::Steel => "#B8B8D0",
            Self::Fairy => "#EE99AC",
        }
    }

    /// All 18 type variants.
    pub fn all() -> &'static [PokemonType] {
        ALL_TYPES
    }
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Error returned when a string is not one of the 18 type slugs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type: '{0}'")]
pub struct TypeParseError(pub String);

impl std::str::FromStr for PokemonType {
    type Err = TypeParseError;

    /// Parse a type from its slug (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_TYPES
            .iter()
            .copied()
            .find(|t| t.slug() == lower)
            .ok_or_else(|| TypeParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/pokemon_type_tests.rs"]
mod tests;
