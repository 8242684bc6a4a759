//! Pokedex Engine library.
//!
//! Read-only Pokemon catalog backed by PokeAPI.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog queries returning presentation DTOs
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared test data.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
