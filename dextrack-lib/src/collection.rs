//! The user's collection: owned entries, favorites, and recently viewed.
//!
//! All three live in one [`CollectionState`] persisted under a single
//! storage key, so an owned→favorite cascade is written in one step and
//! can never be observed half-applied.
//!
//! Invariants, enforced on every write and repaired on load:
//! - every favorite is also owned
//! - `recent` holds no duplicates, newest first, at most [`RECENT_LIMIT`] ids

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dextrack_core::{CATALOG_SIZE, KeyValueStore, generation_info, load_json_or_default, save_json};

use crate::error::CollectionError;

/// Storage key holding the serialized collection.
pub const COLLECTION_KEY: &str = "dextrack_collection";

/// Maximum length of the recently viewed list.
pub const RECENT_LIMIT: usize = 20;

/// Owned/total counts for an id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeStats {
    pub owned: u32,
    pub total: u32,
    /// `round(owned / total * 100)`, 0 for an empty range
    pub percentage: u32,
}

/// Collection-wide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalStats {
    pub owned: u32,
    pub favorites: u32,
    /// Fixed catalog size
    pub total: u32,
}

/// In-memory collection state. Pure: no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    owned: BTreeSet<u32>,
    favorites: BTreeSet<u32>,
    recent: Vec<u32>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_owned(&self, id: u32) -> bool {
        self.owned.contains(&id)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Flip ownership of `id` and return the new state. Un-owning also
    /// drops the id from favorites.
    pub fn toggle_owned(&mut self, id: u32) -> bool {
        if self.owned.remove(&id) {
            self.favorites.remove(&id);
            false
        } else {
            self.owned.insert(id);
            true
        }
    }

    /// Flip favorite status of `id` and return the new state.
    ///
    /// Favoriting an id that isn't owned fails with
    /// [`CollectionError::NotOwned`] and leaves the state unchanged.
    /// Un-favoriting always succeeds.
    pub fn toggle_favorite(&mut self, id: u32) -> Result<bool, CollectionError> {
        if self.favorites.remove(&id) {
            return Ok(false);
        }
        if !self.owned.contains(&id) {
            return Err(CollectionError::NotOwned(id));
        }
        self.favorites.insert(id);
        Ok(true)
    }

    /// Move `id` to the front of the recent list, evicting the oldest
    /// entry past [`RECENT_LIMIT`].
    pub fn record_viewed(&mut self, id: u32) {
        self.recent.retain(|&r| r != id);
        self.recent.insert(0, id);
        self.recent.truncate(RECENT_LIMIT);
    }

    /// Recently viewed ids, most recent first.
    pub fn recent(&self) -> &[u32] {
        &self.recent
    }

    /// Owned ids in ascending order.
    pub fn owned_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.owned.iter().copied()
    }

    /// Favorite ids in ascending order.
    pub fn favorite_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.favorites.iter().copied()
    }

    /// Owned counts for the inclusive interval `start..=end`.
    pub fn stats_for_range(&self, start: u32, end: u32) -> RangeStats {
        if end < start {
            return RangeStats {
                owned: 0,
                total: 0,
                percentage: 0,
            };
        }
        let owned = self.owned.range(start..=end).count() as u32;
        let total = end - start + 1;
        RangeStats {
            owned,
            total,
            percentage: percentage(owned, total),
        }
    }

    pub fn global_stats(&self) -> GlobalStats {
        GlobalStats {
            owned: self.owned.len() as u32,
            favorites: self.favorites.len() as u32,
            total: CATALOG_SIZE,
        }
    }

    /// Restore the invariants on state that didn't come through the
    /// toggle methods (persisted data, hand edits).
    fn repair(&mut self) {
        let orphaned: Vec<u32> = self.favorites.difference(&self.owned).copied().collect();
        if !orphaned.is_empty() {
            log::warn!(
                "Dropping {} favorite(s) that are not owned: {:?}",
                orphaned.len(),
                orphaned
            );
            for id in orphaned {
                self.favorites.remove(&id);
            }
        }

        let mut seen = BTreeSet::new();
        self.recent.retain(|id| seen.insert(*id));
        self.recent.truncate(RECENT_LIMIT);
    }
}

fn percentage(owned: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (owned as f64 / total as f64 * 100.0).round() as u32
}

/// On-disk shape: ids as strings, so the record stays compatible with
/// string-keyed consumers.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedCollection {
    #[serde(default)]
    owned: Vec<String>,
    #[serde(default)]
    favorites: Vec<String>,
    #[serde(default)]
    recent: Vec<String>,
}

impl From<PersistedCollection> for CollectionState {
    fn from(p: PersistedCollection) -> Self {
        let mut state = CollectionState {
            owned: parse_ids(&p.owned).collect(),
            favorites: parse_ids(&p.favorites).collect(),
            recent: parse_ids(&p.recent).collect(),
        };
        state.repair();
        state
    }
}

impl From<&CollectionState> for PersistedCollection {
    fn from(s: &CollectionState) -> Self {
        Self {
            owned: s.owned.iter().map(u32::to_string).collect(),
            favorites: s.favorites.iter().map(u32::to_string).collect(),
            recent: s.recent.iter().map(u32::to_string).collect(),
        }
    }
}

fn parse_ids(raw: &[String]) -> impl Iterator<Item = u32> + '_ {
    raw.iter().filter_map(|s| match s.trim().parse::<u32>() {
        Ok(id) => Some(id),
        Err(_) => {
            log::warn!("Ignoring malformed id '{s}' in collection");
            None
        }
    })
}

/// Persisted collection backed by a [`KeyValueStore`].
///
/// Every call reads the current record, and every mutation rewrites it in
/// full before returning, so a later read always sees the change.
pub struct CollectionStore<S> {
    store: S,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current state. Missing or corrupt records read as empty.
    pub fn state(&self) -> CollectionState {
        let persisted: PersistedCollection = load_json_or_default(&self.store, COLLECTION_KEY);
        persisted.into()
    }

    pub fn is_owned(&self, id: u32) -> bool {
        self.state().is_owned(id)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.state().is_favorite(id)
    }

    pub fn toggle_owned(&self, id: u32) -> Result<bool, CollectionError> {
        self.update(|state| Ok(state.toggle_owned(id)))
    }

    pub fn toggle_favorite(&self, id: u32) -> Result<bool, CollectionError> {
        self.update(|state| state.toggle_favorite(id))
    }

    pub fn record_viewed(&self, id: u32) -> Result<(), CollectionError> {
        self.update(|state| {
            state.record_viewed(id);
            Ok(())
        })
    }

    pub fn recent(&self) -> Vec<u32> {
        self.state().recent().to_vec()
    }

    pub fn owned_ids(&self) -> Vec<u32> {
        self.state().owned_ids().collect()
    }

    pub fn favorite_ids(&self) -> Vec<u32> {
        self.state().favorite_ids().collect()
    }

    pub fn stats_for_range(&self, start: u32, end: u32) -> RangeStats {
        self.state().stats_for_range(start, end)
    }

    /// Owned counts for a generation from the static table.
    pub fn stats_for_generation(&self, number: u8) -> Result<RangeStats, CollectionError> {
        let generation =
            generation_info(number).ok_or(CollectionError::UnknownGeneration(number))?;
        Ok(self.stats_for_range(generation.start, generation.end))
    }

    pub fn global_stats(&self) -> GlobalStats {
        self.state().global_stats()
    }

    /// Load, apply `f`, and persist only if `f` succeeded.
    fn update<T>(
        &self,
        f: impl FnOnce(&mut CollectionState) -> Result<T, CollectionError>,
    ) -> Result<T, CollectionError> {
        let mut state = self.state();
        let out = f(&mut state)?;
        save_json(&self.store, COLLECTION_KEY, &PersistedCollection::from(&state))?;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
