//! PokeAPI HTTP client
//!
//! Implements `PokeApiPort` with a single attempt per call. Retries and
//! caching are layered on top (`ResilientPokeApiClient`, `CachedPokeApiClient`).
//! TLS certificates are verified with reqwest's defaults.

use async_trait::async_trait;
use pokedex_domain::PokemonId;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

use crate::infrastructure::config::PokeApiConfig;
use crate::infrastructure::ports::{FetchError, PokeApiPort};

/// Default PokeAPI root.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default request timeout in seconds.
pub const DEFAULT_POKEAPI_TIMEOUT_SECS: u64 = 30;

/// Client for the PokeAPI REST API
#[derive(Clone)]
pub struct PokeApiHttpClient {
    client: Client,
    base_url: String,
}

impl PokeApiHttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &PokeApiConfig) -> Self {
        Self::new(&config.base_url, config.timeout)
    }

    /// Append percent-encoded path segments to the base URL.
    fn url_for(&self, endpoint: &str, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FetchError::invalid_url(endpoint, e))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::invalid_url(endpoint, "base URL cannot have a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Option<Value>, FetchError> {
        let endpoint = format!("/{}", segments.join("/"));
        let url = self.url_for(&endpoint, segments)?;

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::transport(&endpoint, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(endpoint = %endpoint, "PokeAPI returned 404");
            return Ok(None);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                endpoint = %endpoint,
                status = status.as_u16(),
                body = %body,
                "PokeAPI request failed"
            );
            return Err(FetchError::status(endpoint, status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map(Some)
            .map_err(|e| FetchError::invalid_body(&endpoint, e))
    }
}

impl Default for PokeApiHttpClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_POKEAPI_BASE_URL,
            Duration::from_secs(DEFAULT_POKEAPI_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl PokeApiPort for PokeApiHttpClient {
    async fn fetch_pokemon_by_id(&self, id: PokemonId) -> Result<Option<Value>, FetchError> {
        let id = id.to_string();
        self.get_json(&["pokemon", id.as_str()], &[]).await
    }

    async fn fetch_pokemon_by_name(&self, name: &str) -> Result<Option<Value>, FetchError> {
        let name = name.trim().to_lowercase();
        self.get_json(&["pokemon", name.as_str()], &[]).await
    }

    async fn fetch_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Value>, FetchError> {
        self.get_json(
            &["pokemon"],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }
}
