//! Pokedex Shared - wire types for the presentation layer
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types** - raw integers and strings, already formatted for display

pub mod dto;

pub use dto::{PokemonDto, PokemonListItemDto, PokemonPageDto, PokemonStatsDto};
