//! Infrastructure implementations.
//!
//! Contains port trait implementations for PokeAPI access and caching.

pub mod cache;
pub mod cached_pokeapi;
pub mod clock;
pub mod config;
pub mod pokeapi;
pub mod pokeapi_types;
pub mod pokemon_mapper;
pub mod pokemon_repo;
pub mod ports;
pub mod resilient_pokeapi;
