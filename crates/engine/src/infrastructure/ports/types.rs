//! Result types shared by ports and their callers.

use pokedex_domain::Pokemon;

/// Result of loading one page of Pokemon.
///
/// Includes both the Pokemon that loaded and the ones that were skipped,
/// so callers can report partial failures.
#[derive(Debug, Clone, Default)]
pub struct PokemonPage {
    /// Successfully loaded Pokemon, in page order
    pub pokemon: Vec<Pokemon>,
    /// Entries that failed to fetch or map
    pub skipped: Vec<SkippedPokemon>,
}

impl PokemonPage {
    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

/// A page entry that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPokemon {
    /// Name from the page reference (empty if the reference had none)
    pub name: String,
    /// Why this entry was skipped
    pub reason: String,
}
