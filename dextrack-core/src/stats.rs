use serde::{Deserialize, Serialize};

/// The six base stats every catalog entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

const ALL_STATS: &[StatName] = &[
    StatName::Hp,
    StatName::Attack,
    StatName::Defense,
    StatName::SpecialAttack,
    StatName::SpecialDefense,
    StatName::Speed,
];

impl StatName {
    /// Upstream key (`"special-attack"`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    /// Short label for tabular output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Atk",
            Self::Defense => "Def",
            Self::SpecialAttack => "SpA",
            Self::SpecialDefense => "SpD",
            Self::Speed => "Spe",
        }
    }

    pub fn all() -> &'static [StatName] {
        ALL_STATS
    }
}

/// Base stat block. Values are in `1..=255`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn get(&self, stat: StatName) -> u8 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpecialAttack => self.special_attack,
            StatName::SpecialDefense => self.special_defense,
            StatName::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: StatName, value: u8) {
        let slot = match stat {
            StatName::Hp => &mut self.hp,
            StatName::Attack => &mut self.attack,
            StatName::Defense => &mut self.defense,
            StatName::SpecialAttack => &mut self.special_attack,
            StatName::SpecialDefense => &mut self.special_defense,
            StatName::Speed => &mut self.speed,
        };
        *slot = value;
    }

    /// Sum of all six stats ("base stat total").
    pub fn total(&self) -> u16 {
        StatName::all().iter().map(|&s| self.get(s) as u16).sum()
    }

    /// Iterate `(stat, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatName, u8)> + '_ {
        StatName::all().iter().map(move |&s| (s, self.get(s)))
    }
}
