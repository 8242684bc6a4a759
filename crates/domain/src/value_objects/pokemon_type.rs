//! Pokemon elemental types
//!
//! The set of types is closed: anything outside the 18 known tags is rejected
//! at construction rather than mapped to a fallback.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the 18 elemental types a Pokemon can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Create a type from a tag, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the tag is empty or unknown.
    pub fn new(tag: &str) -> Result<Self, DomainError> {
        let canonical = tag.trim().to_lowercase();
        if canonical.is_empty() {
            return Err(DomainError::validation("Pokemon type cannot be empty"));
        }
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == canonical)
            .ok_or_else(|| DomainError::validation(format!("Invalid Pokemon type: {}", tag)))
    }

    /// All types, in Pokedex order.
    pub fn all() -> &'static [PokemonType] {
        &[
            PokemonType::Normal,
            PokemonType::Fire,
            PokemonType::Water,
            PokemonType::Electric,
            PokemonType::Grass,
            PokemonType::Ice,
            PokemonType::Fighting,
            PokemonType::Poison,
            PokemonType::Ground,
            PokemonType::Flying,
            PokemonType::Psychic,
            PokemonType::Bug,
            PokemonType::Rock,
            PokemonType::Ghost,
            PokemonType::Dragon,
            PokemonType::Dark,
            PokemonType::Steel,
            PokemonType::Fairy,
        ]
    }

    /// Canonical lowercase tag, as used by PokeAPI.
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Display name ("fire" -> "Fire")
    pub fn formatted(&self) -> String {
        super::pokemon_name::capitalize(self.as_str())
    }

    /// Badge color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            PokemonType::Normal => "#A8A878",
            PokemonType::Fire => "#F08030",
            PokemonType::Water => "#6890F0",
            PokemonType::Electric => "#F8D030",
            PokemonType::Grass => "#78C850",
            PokemonType::Ice => "#98D8D8",
            PokemonType::Fighting => "#C03028",
            PokemonType::Poison => "#A040A0",
            PokemonType::Ground => "#E0C068",
            PokemonType::Flying => "#A890F0",
            PokemonType::Psychic => "#F85888",
            PokemonType::Bug => "#A8B820",
            PokemonType::Rock => "#B8A038",
            PokemonType::Ghost => "#705898",
            PokemonType::Dragon => "#7038F8",
            PokemonType::Dark => "#705848",
            PokemonType::Steel => "#B8B8D0",
            PokemonType::Fairy => "#EE99AC",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
