//! Caching PokeAPI wrapper
//!
//! Consults a `CachePort` before delegating. Only successful records are
//! stored: a 404 or an error always reaches the inner client again.

use async_trait::async_trait;
use pokedex_domain::PokemonId;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{CachePort, FetchError, PokeApiPort};

/// Default cache lifetime in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Cache key for a lookup by id.
pub fn id_cache_key(id: PokemonId) -> String {
    format!("pokemon:id:{}", id)
}

/// Cache key for a lookup by name (case and surrounding whitespace ignored).
pub fn name_cache_key(name: &str) -> String {
    format!("pokemon:name:{}", name.trim().to_lowercase())
}

/// Cache key for one list page.
pub fn list_cache_key(limit: u32, offset: u32) -> String {
    format!("pokemon:list:{}:{}", limit, offset)
}

/// `PokeApiPort` that remembers responses for `ttl`.
pub struct CachedPokeApiClient {
    inner: Arc<dyn PokeApiPort>,
    cache: Arc<dyn CachePort>,
    ttl: Duration,
}

impl CachedPokeApiClient {
    pub fn new(inner: Arc<dyn PokeApiPort>, cache: Arc<dyn CachePort>, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    async fn remember<F, Fut>(&self, key: String, fetch: F) -> Result<Option<Value>, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<Value>, FetchError>>,
    {
        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "PokeAPI cache hit");
            return Ok(Some(hit));
        }

        tracing::debug!(key = %key, "PokeAPI cache miss");
        let fetched = fetch().await?;
        if let Some(value) = &fetched {
            self.cache.set(&key, value.clone(), self.ttl).await;
        }
        Ok(fetched)
    }
}

#[async_trait]
impl PokeApiPort for CachedPokeApiClient {
    async fn fetch_pokemon_by_id(&self, id: PokemonId) -> Result<Option<Value>, FetchError> {
        self.remember(id_cache_key(id), || self.inner.fetch_pokemon_by_id(id))
            .await
    }

    async fn fetch_pokemon_by_name(&self, name: &str) -> Result<Option<Value>, FetchError> {
        self.remember(name_cache_key(name), || self.inner.fetch_pokemon_by_name(name))
            .await
    }

    async fn fetch_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Value>, FetchError> {
        self.remember(list_cache_key(limit, offset), || {
            self.inner.fetch_pokemon_list(limit, offset)
        })
        .await
    }
}
