//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - PokeAPI access (HTTP, retry and cache layers all implement the same port)
//! - Response caching (could swap in-memory -> Redis)
//! - Pokemon lookups (what use cases depend on)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PokemonRepo;
pub use types::{PokemonPage, SkippedPokemon};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{CachePort, PokeApiPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCachePort, MockPokeApiPort};
#[cfg(test)]
pub use repos::MockPokemonRepo;
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{FetchError, LoadError, MappingError};
