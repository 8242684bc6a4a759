//! Repository port for Pokemon lookups.

use async_trait::async_trait;
use pokedex_domain::{Pokemon, PokemonId, PokemonName};

use super::types::PokemonPage;

/// Read-only access to Pokemon.
///
/// Implementations never fail: any underlying fault is logged and reported
/// as "not found" or an empty result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonRepo: Send + Sync {
    async fn find_by_id(&self, id: PokemonId) -> Option<Pokemon>;
    async fn find_by_name(&self, name: &PokemonName) -> Option<Pokemon>;

    /// One page of the catalog in PokeAPI order, with per-item failures recorded.
    async fn list(&self, limit: u32, offset: u32) -> PokemonPage;

    /// Exact lookup by id (numeric queries) or name; zero or one result.
    async fn search(&self, query: &str) -> Vec<Pokemon>;
}
