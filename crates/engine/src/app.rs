//! Application state and composition.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::infrastructure::{
    cache::InMemoryCache,
    cached_pokeapi::CachedPokeApiClient,
    clock::SystemClock,
    config::PokeApiConfig,
    pokeapi::PokeApiHttpClient,
    pokemon_repo::PokeApiPokemonRepo,
    ports::{CachePort, ClockPort, PokeApiPort, PokemonRepo},
    resilient_pokeapi::ResilientPokeApiClient,
};
use crate::use_cases;

/// Main application state.
///
/// Holds the repository, the use cases built on it, and the response cache
/// when the app owns one.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub cache: Option<Arc<InMemoryCache>>,
}

/// Container for all repositories.
pub struct Repositories {
    pub pokemon: Arc<dyn PokemonRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub pokemon: use_cases::PokemonUseCases,
}

impl App {
    /// Wire the catalog on top of any PokeAPI port.
    pub fn new(api: Arc<dyn PokeApiPort>) -> Self {
        let pokemon_repo: Arc<dyn PokemonRepo> = Arc::new(PokeApiPokemonRepo::new(api));

        let pokemon = use_cases::PokemonUseCases::new(
            Arc::new(use_cases::pokemon::ListPokemon::new(pokemon_repo.clone())),
            Arc::new(use_cases::pokemon::GetPokemonDetail::new(
                pokemon_repo.clone(),
            )),
            Arc::new(use_cases::pokemon::SearchPokemon::new(pokemon_repo.clone())),
        );

        Self {
            repositories: Repositories {
                pokemon: pokemon_repo,
            },
            use_cases: UseCases { pokemon },
            cache: None,
        }
    }

    /// Production wiring: HTTP client, then retries, then the response cache.
    pub fn from_config(config: &PokeApiConfig) -> Self {
        Self::from_config_with_clock(config, Arc::new(SystemClock::new()))
    }

    pub fn from_config_with_clock(config: &PokeApiConfig, clock: Arc<dyn ClockPort>) -> Self {
        let cache = Arc::new(InMemoryCache::new(clock));
        let cache_port: Arc<dyn CachePort> = cache.clone();

        let http: Arc<dyn PokeApiPort> = Arc::new(PokeApiHttpClient::from_config(config));
        let resilient: Arc<dyn PokeApiPort> =
            Arc::new(ResilientPokeApiClient::new(http, config.retry.clone()));
        let cached: Arc<dyn PokeApiPort> =
            Arc::new(CachedPokeApiClient::new(resilient, cache_port, config.cache_ttl));

        Self {
            cache: Some(cache),
            ..Self::new(cached)
        }
    }

    /// Drop expired entries from the response cache.
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        self.cache
            .as_ref()
            .map_or(0, |cache| cache.purge_expired())
    }

    /// Run `cleanup_expired` every `period` until the returned task is aborted.
    pub fn spawn_cache_cleanup(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let app = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let removed = app.cleanup_expired();
                if removed > 0 {
                    tracing::info!(removed, "Cleaned up expired PokeAPI cache entries");
                }
            }
        })
    }
}
