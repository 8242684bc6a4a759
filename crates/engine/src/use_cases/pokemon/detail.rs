//! Get Pokemon detail use case.

use std::sync::Arc;

use pokedex_domain::{DomainError, PokemonId, PokemonName};
use pokedex_shared::PokemonDto;

use super::to_pokemon_dto;
use crate::infrastructure::ports::PokemonRepo;

/// Look up one Pokemon for its detail page.
pub struct GetPokemonDetail {
    pokemon_repo: Arc<dyn PokemonRepo>,
}

impl GetPokemonDetail {
    pub fn new(pokemon_repo: Arc<dyn PokemonRepo>) -> Self {
        Self { pokemon_repo }
    }

    /// # Returns
    /// * `Ok(Some(dto))` - Pokemon found
    /// * `Ok(None)` - no Pokemon with this id
    /// * `Err(DomainError)` - `id` is not a valid Pokemon id
    pub async fn execute_by_id(&self, id: i64) -> Result<Option<PokemonDto>, DomainError> {
        let id = PokemonId::new(id)?;
        Ok(self
            .pokemon_repo
            .find_by_id(id)
            .await
            .as_ref()
            .map(to_pokemon_dto))
    }

    /// Same as `execute_by_id`, keyed by name (case-insensitive).
    pub async fn execute_by_name(&self, name: &str) -> Result<Option<PokemonDto>, DomainError> {
        let name = PokemonName::new(name)?;
        Ok(self
            .pokemon_repo
            .find_by_name(&name)
            .await
            .as_ref()
            .map(to_pokemon_dto))
    }

    /// Resolve a route-style identifier: digits try the id first and then the
    /// name, anything else is a name. Invalid input is simply not found.
    pub async fn execute_by_identifier(&self, identifier: &str) -> Option<PokemonDto> {
        let identifier = identifier.trim();

        if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = identifier.parse::<PokemonId>() {
                if let Some(pokemon) = self.pokemon_repo.find_by_id(id).await {
                    return Some(to_pokemon_dto(&pokemon));
                }
            }
        }

        match self.execute_by_name(identifier).await {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(identifier = %identifier, error = %e, "Invalid Pokemon identifier");
                None
            }
        }
    }
}
