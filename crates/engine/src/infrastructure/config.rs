//! PokeAPI client configuration.
//!
//! Read from the process environment (after `.env` files are loaded by the
//! binary). Unparseable values fall back to the default and log a warning.

use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::cached_pokeapi::DEFAULT_CACHE_TTL_SECS;
use crate::infrastructure::pokeapi::{DEFAULT_POKEAPI_BASE_URL, DEFAULT_POKEAPI_TIMEOUT_SECS};
use crate::infrastructure::resilient_pokeapi::RetryConfig;

pub const ENV_BASE_URL: &str = "POKEAPI_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "POKEAPI_TIMEOUT_SECS";
pub const ENV_CACHE_TTL_SECS: &str = "POKEAPI_CACHE_TTL_SECS";
pub const ENV_MAX_RETRIES: &str = "POKEAPI_MAX_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "POKEAPI_RETRY_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokeApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub retry: RetryConfig,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_POKEAPI_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            retry: RetryConfig::default(),
        }
    }
}

impl PokeApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let base_url = value(ENV_BASE_URL).unwrap_or(defaults.base_url);
        let timeout_secs = parse_or_default(
            ENV_TIMEOUT_SECS,
            value(ENV_TIMEOUT_SECS),
            DEFAULT_POKEAPI_TIMEOUT_SECS,
        );
        let cache_ttl_secs = parse_or_default(
            ENV_CACHE_TTL_SECS,
            value(ENV_CACHE_TTL_SECS),
            DEFAULT_CACHE_TTL_SECS,
        );
        let max_retries = parse_or_default(
            ENV_MAX_RETRIES,
            value(ENV_MAX_RETRIES),
            defaults.retry.max_retries,
        );
        let delay_ms = parse_or_default(
            ENV_RETRY_DELAY_MS,
            value(ENV_RETRY_DELAY_MS),
            defaults.retry.delay.as_millis() as u64,
        );

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            retry: RetryConfig {
                max_retries,
                delay: Duration::from_millis(delay_ms),
            },
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(
            key,
            value = %raw,
            default = %default,
            "Invalid configuration value, using default"
        );
        default
    })
}
