use serde::Serialize;

/// Number of entries in the catalog. Ids run `1..=CATALOG_SIZE`.
pub const CATALOG_SIZE: u32 = 1025;

/// A generation: a contiguous, inclusive id interval tied to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRange {
    pub number: u8,
    pub start: u32,
    pub end: u32,
    pub region: &'static str,
    pub name: &'static str,
}

impl GenerationRange {
    /// Number of ids in the interval.
    pub fn count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, id: u32) -> bool {
        (self.start..=self.end).contains(&id)
    }
}

const GENERATIONS: &[GenerationRange] = &[
    GenerationRange { number: 1, start: 1, end: 151, region: "Kanto", name: "Generation I" },
    GenerationRange { number: 2, start: 152, end: 251, region: "Johto", name: "Generation II" },
    GenerationRange { number: 3, start: 252, end: 386, region: "Hoenn", name: "Generation III" },
    GenerationRange { number: 4, start: 387, end: 493, region: "Sinnoh", name: "Generation IV" },
    GenerationRange { number: 5, start: 494, end: 649, region: "Unova", name: "Generation V" },
    GenerationRange { number: 6, start: 650, end: 721, region: "Kalos", name: "Generation VI" },
    GenerationRange { number: 7, start: 722, end: 809, region: "Alola", name: "Generation VII" },
    GenerationRange { number: 8, start: 810, end: 905, region: "Galar", name: "Generation VIII" },
    GenerationRange { number: 9, start: 906, end: 1025, region: "Paldea", name: "Generation IX" },
];

/// Look up a generation by number (1–9).
pub fn generation_info(number: u8) -> Option<&'static GenerationRange> {
    GENERATIONS.iter().find(|g| g.number == number)
}

/// All generations in ascending order.
pub fn all_generations() -> &'static [GenerationRange] {
    GENERATIONS
}

/// Generation containing `id`, or `None` outside the catalog.
pub fn generation_for_id(id: u32) -> Option<&'static GenerationRange> {
    GENERATIONS.iter().find(|g| g.contains(id))
}

/// Look up a generation by region name (case-insensitive, e.g. "kanto").
pub fn generation_for_region(region: &str) -> Option<&'static GenerationRange> {
    GENERATIONS
        .iter()
        .find(|g| g.region.eq_ignore_ascii_case(region.trim()))
}

#[cfg(test)]
#[path = "tests/generation_tests.rs"]
mod tests;
