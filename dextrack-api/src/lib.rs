//! Remote catalog access: single-shot fetches, retry, the response cache,
//! and the catalog client built on them.

pub mod cache;
pub mod client;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod retry;
pub mod types;

#[cfg(test)]
mod test_support;

pub use cache::{CACHE_KEY, CacheRecord, CacheSummary, FRESHNESS_WINDOW, ResponseCache, cache_key};
pub use client::{CatalogClient, ClientConfig, NameIndexEntry};
pub use dextrack_core::{all_generations, generation_info};
pub use error::{CatalogError, FetchError};
pub use fetch::{Fetcher, HttpFetcher};
pub use normalize::{NormalizeError, normalize};
pub use retry::{RetryPolicy, fetch_with_retry};
