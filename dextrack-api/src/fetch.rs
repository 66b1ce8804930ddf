//! Single-attempt HTTP fetch with a hard timeout.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::FetchError;

/// Performs exactly one GET and returns the parsed JSON body.
///
/// Implementations must not retry or cache; that's layered on top.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Value, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Value, FetchError> {
        (**self).fetch(url, timeout).await
    }
}

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dextrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::network)?;
        Ok(Self { http })
    }

    async fn fetch_once(&self, url: &str) -> Result<Value, FetchError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(FetchError::network)?;
        serde_json::from_slice(&body).map_err(FetchError::parse)
    }
}

impl Fetcher for HttpFetcher {
    /// Race the request against `timeout`. On expiry the request future is
    /// dropped, which aborts the in-flight connection.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<Value, FetchError> {
        log::debug!("GET {url}");
        match tokio::time::timeout(timeout, self.fetch_once(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        }
    }
}
