//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases turn repository results into presentation DTOs.

pub mod pokemon;

pub use pokemon::PokemonUseCases;
