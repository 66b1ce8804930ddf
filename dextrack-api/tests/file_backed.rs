use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dextrack_api::{
    CACHE_KEY, CatalogClient, ClientConfig, FetchError, Fetcher, ResponseCache, cache_key,
};
use dextrack_core::{JsonFileStore, KeyValueStore};
use dextrack_lib::CollectionStore;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Serves a fixed entry for every URL and counts requests.
#[derive(Default)]
struct CountingFetcher {
    calls: AtomicUsize,
}

impl Fetcher for CountingFetcher {
    async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({
            "id": 133,
            "name": "eevee",
            "height": 3,
            "weight": 65,
            "types": [{"slot": 1, "type": {"name": "normal", "url": ""}}],
            "stats": [
                {"base_stat": 55, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 55, "stat": {"name": "attack", "url": ""}},
                {"base_stat": 50, "stat": {"name": "defense", "url": ""}},
                {"base_stat": 45, "stat": {"name": "special-attack", "url": ""}},
                {"base_stat": 65, "stat": {"name": "special-defense", "url": ""}},
                {"base_stat": 55, "stat": {"name": "speed", "url": ""}}
            ],
            "abilities": [],
            "sprites": {"front_default": null},
            "forms": [{"name": "eevee", "url": ""}]
        }))
    }
}

fn config() -> ClientConfig {
    ClientConfig {
        base_url: "https://example.test".into(),
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn cache_persists_across_clients() {
    let dir = TempDir::new().unwrap();
    let fetcher = Arc::new(CountingFetcher::default());

    let first = CatalogClient::new(fetcher.clone(), JsonFileStore::new(dir.path()), config());
    let entry = first.get_entry(133).await.unwrap();
    assert_eq!(entry.name, "eevee");
    assert_eq!(entry.weight_kg, 6.5);
    drop(first);

    let second = CatalogClient::new(fetcher.clone(), JsonFileStore::new(dir.path()), config());
    assert_eq!(second.get_entry(133).await.unwrap(), entry);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.cache_summary().fresh, 1);
}

#[tokio::test]
async fn corrupt_cache_file_is_refetched() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{CACHE_KEY}.json")), "not json").unwrap();
    let fetcher = Arc::new(CountingFetcher::default());

    let client = CatalogClient::new(fetcher.clone(), JsonFileStore::new(dir.path()), config());
    client.get_entry(133).await.unwrap();
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

    let cache = ResponseCache::new(JsonFileStore::new(dir.path()));
    assert!(cache.get(&cache_key("https://example.test/pokemon/133")).is_some());
}

#[tokio::test]
async fn clearing_cache_keeps_collection() {
    let dir = TempDir::new().unwrap();
    let files = Arc::new(JsonFileStore::new(dir.path()));
    let client = CatalogClient::new(
        Arc::new(CountingFetcher::default()),
        files.clone(),
        config(),
    );
    let collection = CollectionStore::new(files.clone());

    client.get_entry(133).await.unwrap();
    collection.toggle_owned(133).unwrap();

    client.clear_cache().unwrap();
    assert!(files.get(CACHE_KEY).unwrap().is_none());
    assert!(collection.is_owned(133));
}
