//! Filtering and sorting of entry lists for display.
//!
//! The view is recomputed in full from the complete entry list on every
//! call. With at most ~1025 entries there's nothing to gain from
//! incremental updates.

use dextrack_core::CatalogEntry;

use crate::collection::CollectionState;

/// Which entries to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryFilter {
    #[default]
    All,
    Owned,
    Missing,
    Favorites,
}

impl EntryFilter {
    pub fn matches(&self, id: u32, state: &CollectionState) -> bool {
        match self {
            Self::All => true,
            Self::Owned => state.is_owned(id),
            Self::Missing => !state.is_owned(id),
            Self::Favorites => state.is_favorite(id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Owned => "owned",
            Self::Missing => "missing",
            Self::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for EntryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "owned" | "caught" => Ok(Self::Owned),
            "missing" => Ok(Self::Missing),
            "favorites" | "favourites" | "fav" => Ok(Self::Favorites),
            other => Err(format!(
                "unknown filter '{other}' (expected all, owned, missing, favorites)"
            )),
        }
    }
}

/// Display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending dex number
    #[default]
    Number,
    /// Alphabetical by slug
    Name,
    /// By primary type slug, dex order within a type
    Type,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Type => "type",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" | "id" => Ok(Self::Number),
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            other => Err(format!(
                "unknown sort '{other}' (expected number, name, type)"
            )),
        }
    }
}

/// Apply `filter` and `sort` to `entries` against the collection `state`.
pub fn view<'a>(
    entries: &'a [CatalogEntry],
    filter: EntryFilter,
    sort: SortOrder,
    state: &CollectionState,
) -> Vec<&'a CatalogEntry> {
    let mut out: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|e| filter.matches(e.id, state))
        .collect();

    match sort {
        SortOrder::Number => out.sort_by_key(|e| e.id),
        SortOrder::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Type => out.sort_by(|a, b| {
            let ta = a.primary_type().map(|t| t.slug()).unwrap_or("");
            let tb = b.primary_type().map(|t| t.slug()).unwrap_or("");
            ta.cmp(tb).then(a.id.cmp(&b.id))
        }),
    }
    out
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
