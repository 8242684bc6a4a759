//! External service ports: PokeAPI and the response cache.

use std::time::Duration;

use async_trait::async_trait;
use pokedex_domain::PokemonId;
use serde_json::Value;

use super::error::FetchError;

// =============================================================================
// PokeAPI Port
// =============================================================================

/// Raw record access to PokeAPI.
///
/// Records are returned as untyped JSON; turning them into domain objects is
/// the mapper's job. `Ok(None)` means PokeAPI answered 404.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokeApiPort: Send + Sync {
    /// `GET /pokemon/{id}`
    async fn fetch_pokemon_by_id(&self, id: PokemonId) -> Result<Option<Value>, FetchError>;

    /// `GET /pokemon/{name}` (name is lowercased by implementations)
    async fn fetch_pokemon_by_name(&self, name: &str) -> Result<Option<Value>, FetchError>;

    /// `GET /pokemon?limit={limit}&offset={offset}`
    async fn fetch_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Value>, FetchError>;
}

// =============================================================================
// Cache Port
// =============================================================================

/// Shared key/value store for raw PokeAPI responses.
///
/// Implementations must be safe for concurrent use and must never return an
/// entry once its TTL has elapsed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CachePort: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;
    async fn set(&self, key: &str, value: Value, ttl: Duration);
    async fn forget(&self, key: &str);
}
