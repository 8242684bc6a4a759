//! List Pokemon use case.

use std::sync::Arc;

use pokedex_shared::{PokemonListItemDto, PokemonPageDto};

use super::to_list_item_dto;
use crate::infrastructure::ports::PokemonRepo;

/// Fixed page size for `execute_page`.
pub const PAGE_SIZE: u32 = 20;

/// Browse the catalog in PokeAPI order.
pub struct ListPokemon {
    pokemon_repo: Arc<dyn PokemonRepo>,
}

impl ListPokemon {
    pub fn new(pokemon_repo: Arc<dyn PokemonRepo>) -> Self {
        Self { pokemon_repo }
    }

    /// Up to `limit` Pokemon starting at `offset`. Entries that failed to
    /// load are left out.
    pub async fn execute(&self, limit: u32, offset: u32) -> Vec<PokemonListItemDto> {
        let page = self.pokemon_repo.list(limit, offset).await;
        page.pokemon.iter().map(to_list_item_dto).collect()
    }

    /// One fixed-size page, 1-based. Page numbers below 1 read page 1.
    pub async fn execute_page(&self, page: i64) -> PokemonPageDto {
        let current_page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        let offset = (current_page - 1).saturating_mul(PAGE_SIZE);

        let items = self.execute(PAGE_SIZE, offset).await;
        let has_more = items.len() == PAGE_SIZE as usize;

        PokemonPageDto {
            items,
            current_page,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockPokemonRepo, PokemonPage, SkippedPokemon};
    use crate::test_fixtures::pokemon;
    use mockall::predicate::*;
    use pokedex_domain::PokemonType;

    fn full_page(start: i64, len: i64) -> PokemonPage {
        PokemonPage {
            pokemon: (start..start + len)
                .map(|id| pokemon(id, &format!("mon{}", id), vec![PokemonType::Normal]))
                .collect(),
            skipped: Vec::new(),
        }
    }

    #[tokio::test]
    async fn execute_returns_list_items_in_order() {
        let mut repo = MockPokemonRepo::new();
        repo.expect_list()
            .with(eq(3), eq(0))
            .returning(|_, _| full_page(1, 3));

        let items = ListPokemon::new(Arc::new(repo)).execute(3, 0).await;
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(items[0].name, "Mon1");
    }

    #[tokio::test]
    async fn execute_leaves_out_skipped_entries() {
        let mut repo = MockPokemonRepo::new();
        repo.expect_list().returning(|_, _| PokemonPage {
            pokemon: full_page(1, 2).pokemon,
            skipped: vec![SkippedPokemon {
                name: "ditto".to_string(),
                reason: "Pokemon not found".to_string(),
            }],
        });

        let items = ListPokemon::new(Arc::new(repo)).execute(3, 0).await;
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn page_offsets_by_page_size() {
        let mut repo = MockPokemonRepo::new();
        repo.expect_list()
            .with(eq(PAGE_SIZE), eq(40))
            .times(1)
            .returning(|_, _| full_page(41, 20));

        let page = ListPokemon::new(Arc::new(repo)).execute_page(3).await;
        assert_eq!(page.current_page, 3);
        assert_eq!(page.items.len(), 20);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn page_below_one_reads_first_page() {
        let mut repo = MockPokemonRepo::new();
        repo.expect_list()
            .with(eq(PAGE_SIZE), eq(0))
            .times(2)
            .returning(|_, _| full_page(1, 5));

        let list = ListPokemon::new(Arc::new(repo));
        for requested in [0, -4] {
            let page = list.execute_page(requested).await;
            assert_eq!(page.current_page, 1);
            assert!(!page.has_more);
        }
    }
}
