use std::time::Duration;

use futures::{StreamExt, TryStreamExt, stream};
use serde::Serialize;
use serde::de::DeserializeOwned;

use dextrack_core::sprites::has_gigantamax;
use dextrack_core::util::id_from_resource_url;
use dextrack_core::{
    CATALOG_SIZE, CatalogEntry, EntryRef, FormRef, GigantamaxInfo, KeyValueStore, StorageError,
};
use dextrack_lib::ApiSettings;

use crate::cache::{CacheSummary, ResponseCache, cache_key};
use crate::error::{CatalogError, FetchError};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::normalize::{normalize, species_forms};
use crate::retry::{RetryPolicy, fetch_with_retry};
use crate::types::{RawNamedList, RawPokemon, RawSpecies};

/// Tuning for a [`CatalogClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub base_url: String,
    pub retry: RetryPolicy,
    /// Per-attempt timeout for the name index request
    pub index_timeout: Duration,
    /// Maximum in-flight requests when resolving many entries
    pub fan_out: usize,
    /// Highest valid id; also the name index page size
    pub catalog_max: u32,
    pub search_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from(&ApiSettings::default())
    }
}

impl From<&ApiSettings> for ClientConfig {
    fn from(api: &ApiSettings) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from_settings(api),
            index_timeout: Duration::from_millis(api.index_timeout_ms),
            fan_out: api.fan_out,
            catalog_max: CATALOG_SIZE,
            search_limit: 20,
        }
    }
}

/// One row of the name index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIndexEntry {
    pub id: u32,
    pub name: String,
}

/// Catalog access: cache first, then the network with retry.
///
/// Many-entry operations resolve through an ordered, bounded stream on the
/// calling task, so results keep request order and nothing is spawned.
pub struct CatalogClient<F, S> {
    fetcher: F,
    cache: ResponseCache<S>,
    config: ClientConfig,
}

impl<S: KeyValueStore> CatalogClient<HttpFetcher, S> {
    /// Client backed by real HTTP, configured from settings.
    pub fn with_http(api: &ApiSettings, store: S) -> Result<Self, FetchError> {
        Ok(Self::new(HttpFetcher::new()?, store, ClientConfig::from(api)))
    }
}

impl<F: Fetcher, S: KeyValueStore> CatalogClient<F, S> {
    pub fn new(fetcher: F, store: S, config: ClientConfig) -> Self {
        Self {
            fetcher,
            cache: ResponseCache::new(store),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn cache(&self) -> &ResponseCache<S> {
        &self.cache
    }

    fn fan_out(&self) -> usize {
        self.config.fan_out.max(1)
    }

    /// Serve `url` from the cache when fresh, otherwise fetch it with retry
    /// and cache the parsed (trimmed) payload.
    ///
    /// An upstream 404 becomes [`CatalogError::NotFound`]. A cached payload
    /// that no longer parses is ignored and refetched.
    async fn fetch_cached<T>(&self, url: &str, policy: &RetryPolicy) -> Result<T, CatalogError>
    where
        T: DeserializeOwned + Serialize,
    {
        let key = cache_key(url);
        if let Some(cached) = self.cache.get(&key) {
            match serde_json::from_value(cached) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => log::warn!("Ignoring unreadable cached payload for {url}: {e}"),
            }
        }

        let value = fetch_with_retry(&self.fetcher, url, policy)
            .await
            .map_err(|e| match e.status() {
                Some(404) => CatalogError::NotFound(url.to_string()),
                _ => CatalogError::Fetch(e),
            })?;
        let parsed: T =
            serde_json::from_value(value).map_err(|e| CatalogError::malformed(url, e))?;

        match serde_json::to_value(&parsed) {
            Ok(trimmed) => {
                if let Err(e) = self.cache.put(&key, trimmed) {
                    log::warn!("Failed to cache {url}: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize {url} for caching: {e}"),
        }
        Ok(parsed)
    }

    /// Fetch one entry by id or name.
    pub async fn get_entry(
        &self,
        reference: impl Into<EntryRef>,
    ) -> Result<CatalogEntry, CatalogError> {
        let reference = reference.into();
        let segment = reference.path_segment();
        if segment.is_empty() {
            return Err(CatalogError::NotFound(reference.to_string()));
        }
        let url = format!("{}/pokemon/{segment}", self.config.base_url);
        let raw: RawPokemon = self
            .fetch_cached(&url, &self.config.retry)
            .await
            .map_err(|e| match e {
                CatalogError::NotFound(_) => CatalogError::NotFound(reference.to_string()),
                other => other,
            })?;
        normalize(raw).map_err(|e| CatalogError::malformed(url, e))
    }

    async fn resolve_all(
        &self,
        ids: impl IntoIterator<Item = u32>,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        stream::iter(ids)
            .map(|id| self.get_entry(id))
            .buffered(self.fan_out())
            .try_collect()
            .await
    }

    /// Every entry with id in `start..=end`, in id order.
    ///
    /// All or nothing: the first failure fails the whole call.
    pub async fn get_range(&self, start: u32, end: u32) -> Result<Vec<CatalogEntry>, CatalogError> {
        if end < start {
            return Ok(Vec::new());
        }
        log::debug!("Fetching range {start}..={end}");
        self.resolve_all(start..=end).await
    }

    /// Like [`get_range`](Self::get_range) but each id carries its own
    /// result, so one failure doesn't discard the rest.
    pub async fn get_range_partial(
        &self,
        start: u32,
        end: u32,
    ) -> Vec<(u32, Result<CatalogEntry, CatalogError>)> {
        if end < start {
            return Vec::new();
        }
        stream::iter(start..=end)
            .map(|id| async move { (id, self.get_entry(id).await) })
            .buffered(self.fan_out())
            .collect()
            .await
    }

    /// Entries with ids `start..start + count`, skipping ids above
    /// `catalog_max`.
    pub async fn get_batch(
        &self,
        start: u32,
        count: u32,
        catalog_max: u32,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let end = start.saturating_add(count);
        let ids = (start.max(1)..end).take_while(|id| *id <= catalog_max);
        self.resolve_all(ids).await
    }

    /// The full id/name listing, in upstream order.
    pub async fn name_index(&self) -> Result<Vec<NameIndexEntry>, CatalogError> {
        let url = format!(
            "{}/pokemon?limit={}",
            self.config.base_url, self.config.catalog_max
        );
        let policy = self.config.retry.with_timeout(self.config.index_timeout);
        let list: RawNamedList = self.fetch_cached(&url, &policy).await?;
        Ok(list
            .results
            .into_iter()
            .filter_map(|r| {
                Some(NameIndexEntry {
                    id: id_from_resource_url(&r.url)?,
                    name: r.name,
                })
            })
            .collect())
    }

    /// Up to `search_limit` entries matching `query`.
    ///
    /// A numeric query in range resolves that id first. Remaining slots are
    /// filled from names containing the query (case-insensitive), in index
    /// order. Individual failures are dropped, never surfaced.
    pub async fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let limit = self.config.search_limit;
        let mut results = Vec::new();

        if let Ok(id) = needle.parse::<u32>() {
            if (1..=self.config.catalog_max).contains(&id) {
                match self.get_entry(id).await {
                    Ok(entry) => results.push(entry),
                    Err(e) => log::debug!("Direct lookup of #{id} failed: {e}"),
                }
            }
        }

        if results.len() >= limit {
            return results;
        }

        let index = match self.name_index().await {
            Ok(index) => index,
            Err(e) => {
                log::warn!("Name index unavailable: {e}");
                return results;
            }
        };

        let names: Vec<String> = index
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .filter(|e| !results.iter().any(|r: &CatalogEntry| r.id == e.id))
            .take(limit - results.len())
            .map(|e| e.name)
            .collect();
        log::debug!("Search '{needle}': resolving {} name match(es)", names.len());

        let resolved: Vec<_> = stream::iter(names)
            .map(|name| async move {
                let outcome = self.get_entry(EntryRef::Name(name.clone())).await;
                (name, outcome)
            })
            .buffered(self.fan_out())
            .collect()
            .await;
        for (name, outcome) in resolved {
            match outcome {
                Ok(entry) => results.push(entry),
                Err(e) => log::debug!("Dropping search match '{name}': {e}"),
            }
        }
        results
    }

    /// Alternate forms for a species. Empty when there is only one variety
    /// or the lookup fails.
    pub async fn get_forms(&self, reference: impl Into<EntryRef>) -> Vec<FormRef> {
        let reference = reference.into();
        let url = format!(
            "{}/pokemon-species/{}",
            self.config.base_url,
            reference.path_segment()
        );
        match self.fetch_cached::<RawSpecies>(&url, &self.config.retry).await {
            Ok(species) => species_forms(&species),
            Err(e) => {
                log::debug!("Forms lookup for {reference} failed: {e}");
                Vec::new()
            }
        }
    }

    /// Whether `id` has a Gigantamax form.
    ///
    /// Checks the entry's listed forms first and falls back to the static
    /// table when the fetch fails or lists none.
    pub async fn gigantamax_info(&self, id: u32) -> GigantamaxInfo {
        match self.get_entry(id).await {
            Ok(entry) if entry.forms.iter().any(|f| f.contains("gigantamax")) => {
                return GigantamaxInfo {
                    has_gigantamax: true,
                    gigantamax_name: Some(format!("{}-gigantamax", entry.name)),
                };
            }
            Ok(_) => {}
            Err(e) => log::debug!("Gigantamax probe for #{id} failed: {e}"),
        }
        GigantamaxInfo {
            has_gigantamax: has_gigantamax(id),
            gigantamax_name: None,
        }
    }

    pub fn clear_cache(&self) -> Result<(), StorageError> {
        self.cache.clear()
    }

    pub fn cache_summary(&self) -> CacheSummary {
        self.cache.summary()
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
