//! `PokemonRepo` backed by PokeAPI.
//!
//! Every fault below this adapter (fetch, mapping, validation) is logged and
//! turned into "not found" or a skipped page entry. Callers never see errors.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use pokedex_domain::{Pokemon, PokemonId, PokemonName};
use serde::Deserialize;

use crate::infrastructure::pokeapi_types::RawPokemonPage;
use crate::infrastructure::pokemon_mapper::PokemonMapper;
use crate::infrastructure::ports::{
    LoadError, PokeApiPort, PokemonPage, PokemonRepo, SkippedPokemon,
};

pub struct PokeApiPokemonRepo {
    api: Arc<dyn PokeApiPort>,
    mapper: PokemonMapper,
}

impl PokeApiPokemonRepo {
    pub fn new(api: Arc<dyn PokeApiPort>) -> Self {
        Self {
            api,
            mapper: PokemonMapper::new(),
        }
    }

    /// Fetch and map one Pokemon by id, keeping the failure reason.
    pub async fn load_by_id(&self, id: PokemonId) -> Result<Pokemon, LoadError> {
        let raw = self
            .api
            .fetch_pokemon_by_id(id)
            .await?
            .ok_or(LoadError::NotFound)?;
        Ok(self.mapper.map(&raw)?)
    }

    /// Fetch and map one Pokemon by name, keeping the failure reason.
    pub async fn load_by_name(&self, name: &str) -> Result<Pokemon, LoadError> {
        let raw = self
            .api
            .fetch_pokemon_by_name(name)
            .await?
            .ok_or(LoadError::NotFound)?;
        Ok(self.mapper.map(&raw)?)
    }

    /// Names referenced by one list page, in page order, plus the catalog
    /// size PokeAPI reported. `None` marks an entry without a name.
    async fn page_names(&self, limit: u32, offset: u32) -> (Vec<Option<String>>, Option<u64>) {
        let raw = match self.api.fetch_pokemon_list(limit, offset).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::warn!(limit, offset, "PokeAPI returned no list page");
                return (Vec::new(), None);
            }
            Err(e) => {
                tracing::error!(limit, offset, error = %e, "Failed to list Pokemon");
                return (Vec::new(), None);
            }
        };

        let page = match RawPokemonPage::deserialize(&raw) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(limit, offset, error = %e, "PokeAPI list page has an invalid shape");
                return (Vec::new(), None);
            }
        };

        let Some(results) = page.results else {
            tracing::warn!(limit, offset, "PokeAPI list page has no results");
            return (Vec::new(), page.count);
        };

        let names = results
            .into_iter()
            .take(limit as usize)
            .map(|entry| entry.name)
            .collect();
        (names, page.count)
    }
}

fn is_numeric(query: &str) -> bool {
    !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait]
impl PokemonRepo for PokeApiPokemonRepo {
    async fn find_by_id(&self, id: PokemonId) -> Option<Pokemon> {
        match self.load_by_id(id).await {
            Ok(pokemon) => Some(pokemon),
            Err(LoadError::NotFound) => {
                tracing::debug!(id = %id, "Pokemon not found by id");
                None
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to find Pokemon by id");
                None
            }
        }
    }

    async fn find_by_name(&self, name: &PokemonName) -> Option<Pokemon> {
        match self.load_by_name(name.as_str()).await {
            Ok(pokemon) => Some(pokemon),
            Err(LoadError::NotFound) => {
                tracing::debug!(name = %name, "Pokemon not found by name");
                None
            }
            Err(e) => {
                tracing::error!(name = %name, error = %e, "Failed to find Pokemon by name");
                None
            }
        }
    }

    async fn list(&self, limit: u32, offset: u32) -> PokemonPage {
        let (names, catalog_size) = self.page_names(limit, offset).await;

        let loads = names.iter().map(|name| async move {
            match name {
                Some(name) => self.load_by_name(name).await,
                None => Err(LoadError::MissingName),
            }
        });
        let outcomes = join_all(loads).await;

        let page = names.into_iter().zip(outcomes).fold(
            PokemonPage::default(),
            |mut page, (name, outcome)| {
                match outcome {
                    Ok(pokemon) => page.pokemon.push(pokemon),
                    Err(e) => {
                        let name = name.unwrap_or_default();
                        let reason = e.to_string();
                        tracing::warn!(
                            name = %name,
                            reason = %reason,
                            "Skipping Pokemon that failed to load"
                        );
                        page.skipped.push(SkippedPokemon { name, reason });
                    }
                }
                page
            },
        );

        tracing::info!(
            limit,
            offset,
            catalog_size = catalog_size.unwrap_or_default(),
            loaded = page.pokemon.len(),
            skipped = page.skipped.len(),
            "Listed Pokemon"
        );
        page
    }

    async fn search(&self, query: &str) -> Vec<Pokemon> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        if is_numeric(query) {
            match query.parse::<PokemonId>() {
                Ok(id) => {
                    if let Some(pokemon) = self.find_by_id(id).await {
                        return vec![pokemon];
                    }
                }
                Err(e) => {
                    tracing::warn!(query = %query, error = %e, "Search by id skipped");
                }
            }
        }

        let name = match PokemonName::new(query) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Search by name skipped");
                return Vec::new();
            }
        };

        let results: Vec<Pokemon> = self.find_by_name(&name).await.into_iter().collect();
        tracing::info!(query = %query, results = results.len(), "Search completed");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{FetchError, MockPokeApiPort};
    use crate::test_fixtures::{pikachu_json, raw_page_json, raw_pokemon_json};
    use mockall::predicate::*;
    use serde_json::json;

    fn repo(api: MockPokeApiPort) -> PokeApiPokemonRepo {
        PokeApiPokemonRepo::new(Arc::new(api))
    }

    #[tokio::test]
    async fn find_by_id_maps_the_record() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id()
            .with(eq(PokemonId::new(25).unwrap()))
            .returning(|_| Ok(Some(pikachu_json())));

        let pokemon = repo(api)
            .find_by_id(PokemonId::new(25).unwrap())
            .await
            .unwrap();
        assert_eq!(pokemon.name().as_str(), "pikachu");
    }

    #[tokio::test]
    async fn find_by_id_hides_not_found_and_failures() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id()
            .with(eq(PokemonId::new(99999).unwrap()))
            .returning(|_| Ok(None));
        api.expect_fetch_pokemon_by_id()
            .with(eq(PokemonId::new(1).unwrap()))
            .returning(|_| Err(FetchError::status("/pokemon/1", 500, "boom")));

        let repo = repo(api);
        assert!(repo.find_by_id(PokemonId::new(99999).unwrap()).await.is_none());
        assert!(repo.find_by_id(PokemonId::new(1).unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn find_by_name_hides_mapping_failures() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_name()
            .with(eq("pikachu"))
            .returning(|_| Ok(Some(json!({"id": 25, "name": "pikachu"}))));

        let name = PokemonName::new("Pikachu").unwrap();
        assert!(repo(api).find_by_name(&name).await.is_none());
    }

    #[tokio::test]
    async fn load_by_name_keeps_the_reason() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_name().returning(|_| Ok(None));

        let err = repo(api).load_by_name("missingno").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound));
    }

    #[tokio::test]
    async fn list_skips_failed_entries_and_keeps_order() {
        let names: Vec<String> = (1..=20).map(|i| format!("mon{}", i)).collect();
        let page_names: Vec<&str> = names.iter().map(String::as_str).collect();
        let page = raw_page_json(&page_names);

        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_list()
            .with(eq(20), eq(0))
            .times(1)
            .returning(move |_, _| Ok(Some(page.clone())));
        api.expect_fetch_pokemon_by_name()
            .times(20)
            .returning(|name| {
                if name == "mon7" {
                    return Err(FetchError::transport("/pokemon/mon7", "connection reset"));
                }
                let id: i64 = name.trim_start_matches("mon").parse().unwrap();
                Ok(Some(raw_pokemon_json(id, name, &["normal"])))
            });

        let page = repo(api).list(20, 0).await;

        assert_eq!(page.pokemon.len(), 19);
        assert_eq!(page.skipped.len(), 1);
        assert_eq!(page.skipped[0].name, "mon7");
        assert!(page.skipped[0].reason.contains("connection reset"));

        let ids: Vec<u32> = page.pokemon.iter().map(|p| p.id().value()).collect();
        let expected: Vec<u32> = (1..=20).filter(|i| *i != 7).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn list_records_not_found_and_nameless_entries() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_list().returning(|_, _| {
            Ok(Some(json!({
                "count": 3,
                "results": [
                    {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"},
                    {"url": "https://pokeapi.co/api/v2/pokemon/0/"},
                    {"name": "missingno", "url": "https://pokeapi.co/api/v2/pokemon/0/"}
                ]
            })))
        });
        api.expect_fetch_pokemon_by_name()
            .with(eq("pikachu"))
            .returning(|_| Ok(Some(pikachu_json())));
        api.expect_fetch_pokemon_by_name()
            .with(eq("missingno"))
            .returning(|_| Ok(None));

        let page = repo(api).list(3, 0).await;

        assert_eq!(page.pokemon.len(), 1);
        assert_eq!(
            page.skipped,
            vec![
                SkippedPokemon {
                    name: String::new(),
                    reason: "missing name".to_string(),
                },
                SkippedPokemon {
                    name: "missingno".to_string(),
                    reason: "Pokemon not found".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn list_is_empty_when_the_page_cannot_be_loaded() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_list()
            .with(eq(20), eq(0))
            .returning(|_, _| Err(FetchError::status("/pokemon", 503, "unavailable")));
        api.expect_fetch_pokemon_list()
            .with(eq(20), eq(20))
            .returning(|_, _| Ok(Some(json!({"count": 0}))));
        api.expect_fetch_pokemon_list()
            .with(eq(20), eq(40))
            .returning(|_, _| Ok(Some(json!({"results": "nope"}))));
        api.expect_fetch_pokemon_by_name().times(0);

        let repo = repo(api);
        assert!(repo.list(20, 0).await.is_empty());
        assert!(repo.list(20, 20).await.is_empty());
        assert!(repo.list(20, 40).await.is_empty());
    }

    #[tokio::test]
    async fn list_never_returns_more_than_limit() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_list()
            .returning(|_, _| Ok(Some(raw_page_json(&["bulbasaur", "ivysaur", "venusaur"]))));
        api.expect_fetch_pokemon_by_name()
            .times(2)
            .returning(|name| Ok(Some(raw_pokemon_json(1, name, &["grass"]))));

        let page = repo(api).list(2, 0).await;
        assert_eq!(page.pokemon.len(), 2);
    }

    #[tokio::test]
    async fn numeric_search_stops_at_id_hit() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id()
            .with(eq(PokemonId::new(25).unwrap()))
            .times(1)
            .returning(|_| Ok(Some(pikachu_json())));
        api.expect_fetch_pokemon_by_name().times(0);

        let results = repo(api).search("25").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "pikachu");
    }

    #[tokio::test]
    async fn numeric_search_falls_back_to_name() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id()
            .times(1)
            .returning(|_| Ok(None));
        api.expect_fetch_pokemon_by_name()
            .with(eq("99999"))
            .times(1)
            .returning(|_| Ok(None));

        assert!(repo(api).search("99999").await.is_empty());
    }

    #[tokio::test]
    async fn zero_is_not_an_id() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id().times(0);
        api.expect_fetch_pokemon_by_name()
            .with(eq("0"))
            .times(1)
            .returning(|_| Ok(None));

        assert!(repo(api).search("0").await.is_empty());
    }

    #[tokio::test]
    async fn name_search_is_case_insensitive() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id().times(0);
        api.expect_fetch_pokemon_by_name()
            .with(eq("pikachu"))
            .times(1)
            .returning(|_| Ok(Some(pikachu_json())));

        let results = repo(api).search("  PIKACHU ").await;
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn blank_search_fetches_nothing() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_id().times(0);
        api.expect_fetch_pokemon_by_name().times(0);

        let repo = repo(api);
        assert!(repo.search("").await.is_empty());
        assert!(repo.search("   ").await.is_empty());
    }

    #[tokio::test]
    async fn overlong_search_fetches_nothing() {
        let mut api = MockPokeApiPort::new();
        api.expect_fetch_pokemon_by_name().times(0);

        assert!(repo(api).search(&"a".repeat(101)).await.is_empty());
    }

    #[test]
    fn numeric_means_ascii_digits_only() {
        assert!(is_numeric("25"));
        assert!(is_numeric("007"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("2.5"));
        assert!(!is_numeric("٣"));
    }
}
