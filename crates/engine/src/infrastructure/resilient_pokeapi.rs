//! Resilient PokeAPI wrapper with fixed-delay retry
//!
//! Wraps any `PokeApiPort` and retries transient failures (transport faults,
//! 5xx, 429). A 404 is not a failure and is returned immediately.

use async_trait::async_trait;
use pokedex_domain::PokemonId;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{FetchError, PokeApiPort};

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 = no retries, just the initial attempt)
    pub max_retries: u32,
    /// Fixed pause between attempts
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_millis(100),
        }
    }
}

/// Wrapper that adds retry logic to any PokeAPI client
pub struct ResilientPokeApiClient {
    inner: Arc<dyn PokeApiPort>,
    config: RetryConfig,
}

impl ResilientPokeApiClient {
    pub fn new(inner: Arc<dyn PokeApiPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    async fn execute_with_retry<F, Fut>(
        &self,
        operation_name: &str,
        operation: F,
    ) -> Result<Option<Value>, FetchError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<Option<Value>, FetchError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(response) => {
                    if attempt > 0 {
                        tracing::info!(
                            attempt = attempt + 1,
                            operation = operation_name,
                            "PokeAPI request succeeded after retry"
                        );
                    }
                    return Ok(response);
                }
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = self.config.delay.as_millis() as u64,
                        endpoint = %e.endpoint(),
                        error = %e,
                        operation = operation_name,
                        "PokeAPI request failed, retrying..."
                    );
                    tokio::time::sleep(self.config.delay).await;
                }
                Err(e) => {
                    tracing::error!(
                        attempts = attempt + 1,
                        endpoint = %e.endpoint(),
                        error = %e,
                        operation = operation_name,
                        "PokeAPI request failed"
                    );
                    return Err(e);
                }
            }
        }
    }
}

#[async_trait]
impl PokeApiPort for ResilientPokeApiClient {
    async fn fetch_pokemon_by_id(&self, id: PokemonId) -> Result<Option<Value>, FetchError> {
        self.execute_with_retry("fetch_pokemon_by_id", || {
            self.inner.fetch_pokemon_by_id(id)
        })
        .await
    }

    async fn fetch_pokemon_by_name(&self, name: &str) -> Result<Option<Value>, FetchError> {
        self.execute_with_retry("fetch_pokemon_by_name", || {
            self.inner.fetch_pokemon_by_name(name)
        })
        .await
    }

    async fn fetch_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Value>, FetchError> {
        self.execute_with_retry("fetch_pokemon_list", || {
            self.inner.fetch_pokemon_list(limit, offset)
        })
        .await
    }
}
