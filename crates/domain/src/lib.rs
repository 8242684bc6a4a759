//! Pokedex Domain - value objects and the Pokemon aggregate.
//!
//! Pure types: no I/O, no async, no knowledge of PokeAPI's wire format.

pub mod aggregates;
pub mod error;
pub mod value_objects;

pub use aggregates::{Pokemon, PokemonListItem};
pub use error::DomainError;
pub use value_objects::{PokemonId, PokemonName, PokemonStats, PokemonType};
