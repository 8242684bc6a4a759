//! Search Pokemon use case.

use std::sync::Arc;

use pokedex_shared::PokemonListItemDto;

use super::to_list_item_dto;
use crate::infrastructure::ports::PokemonRepo;

/// Longest query accepted; matches the longest valid name.
pub const MAX_QUERY_LENGTH: usize = 100;

/// Exact lookup by id or name. PokeAPI has no fuzzy search, so the result
/// holds zero or one Pokemon.
pub struct SearchPokemon {
    pokemon_repo: Arc<dyn PokemonRepo>,
}

impl SearchPokemon {
    pub fn new(pokemon_repo: Arc<dyn PokemonRepo>) -> Self {
        Self { pokemon_repo }
    }

    pub async fn execute(&self, query: &str) -> Vec<PokemonListItemDto> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        if query.chars().count() > MAX_QUERY_LENGTH {
            tracing::debug!(length = query.chars().count(), "Search query too long");
            return Vec::new();
        }

        self.pokemon_repo
            .search(query)
            .await
            .iter()
            .map(to_list_item_dto)
            .collect()
    }
}
