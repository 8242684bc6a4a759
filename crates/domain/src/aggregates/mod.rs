//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Factory pattern | `::new()` taking pre-validated value objects |

pub mod pokemon;

pub use pokemon::{Pokemon, PokemonListItem};
