//! PokeAPI HTTP client
//!
//! Every fetch goes through the response cache: look the URL up first, hit
//! the network only on a miss, then remember the body for next time. The
//! cache is injected at construction and all I/O happens outside its lock.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == PokeAPI Client ==
/// Cache-backed client for the PokeAPI REST service.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client for the configured base URL, taking ownership of
    /// the response cache.
    pub fn new(config: &Config, cache: Cache) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("pokedex-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    // == URL Builders ==
    /// URL of the first location-area page for the given page size.
    pub fn location_areas_url(&self, limit: u32) -> String {
        format!("{}/location-area?offset=0&limit={}", self.base_url, limit)
    }

    /// URL of a single location area's detail document.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, name)
    }

    /// URL of a single Pokemon's detail document.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }

    // == Typed Fetches ==
    /// Fetches one page of the location-area listing. The caller supplies
    /// the full URL so pagination cursors from previous responses work
    /// unchanged.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetches a location area's detail document by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetches a Pokemon's detail document by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }

    // == Raw Fetch ==
    /// Fetches raw bytes for a URL, consulting the cache first.
    ///
    /// Only successful response bodies are cached, keyed by the full URL.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?.to_vec();
        self.cache.put(url, body.clone()).await;
        Ok(body)
    }

    /// Fetches a URL and decodes the body as JSON.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Cache Access ==
    /// The response cache backing this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Stops the cache's background reaper.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }
}
