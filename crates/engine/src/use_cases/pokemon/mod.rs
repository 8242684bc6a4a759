//! Pokemon catalog use cases.

mod detail;
mod list;
mod search;

pub use detail::GetPokemonDetail;
pub use list::{ListPokemon, PAGE_SIZE};
pub use search::SearchPokemon;

use std::sync::Arc;

use pokedex_domain::Pokemon;
use pokedex_shared::{PokemonDto, PokemonListItemDto, PokemonStatsDto};

/// Container for Pokemon use cases.
pub struct PokemonUseCases {
    pub list: Arc<ListPokemon>,
    pub detail: Arc<GetPokemonDetail>,
    pub search: Arc<SearchPokemon>,
}

impl PokemonUseCases {
    pub fn new(
        list: Arc<ListPokemon>,
        detail: Arc<GetPokemonDetail>,
        search: Arc<SearchPokemon>,
    ) -> Self {
        Self {
            list,
            detail,
            search,
        }
    }
}

// =============================================================================
// Domain -> DTO
// =============================================================================

pub(crate) fn to_pokemon_dto(pokemon: &Pokemon) -> PokemonDto {
    let stats = pokemon.stats();
    PokemonDto {
        id: pokemon.id().value(),
        name: pokemon.name().formatted(),
        image_url: pokemon.image_url().to_string(),
        types: pokemon.types().iter().map(|t| t.formatted()).collect(),
        stats: PokemonStatsDto {
            hp: stats.hp(),
            attack: stats.attack(),
            defense: stats.defense(),
            special_attack: stats.special_attack(),
            special_defense: stats.special_defense(),
            speed: stats.speed(),
            total: stats.total(),
        },
        height: pokemon.height(),
        weight: pokemon.weight(),
    }
}

pub(crate) fn to_list_item_dto(pokemon: &Pokemon) -> PokemonListItemDto {
    let item = pokemon.to_list_item();
    PokemonListItemDto {
        id: item.id.value(),
        name: item.name.formatted(),
        image_url: item.image_url,
    }
}
