//! Value objects - Immutable objects defined by their attributes
//!
//! Every value object validates in its constructor and is valid for its whole
//! lifetime afterwards; none of them expose `&mut` methods.

mod pokemon_id;
mod pokemon_name;
mod pokemon_stats;
mod pokemon_type;

pub use pokemon_id::PokemonId;
pub use pokemon_name::PokemonName;
pub use pokemon_stats::PokemonStats;
pub use pokemon_type::PokemonType;
