//! Pokemon identifier (National Pokedex number)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A validated Pokemon identifier (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PokemonId(u32);

impl PokemonId {
    /// Create a new validated identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is below 1 or does not
    /// fit in 32 bits.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::validation(
                "Pokemon ID must be a positive integer",
            ));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("Pokemon ID {} is too large", value)))
    }

    /// Returns the raw identifier.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PokemonId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PokemonId> for u32 {
    fn from(id: PokemonId) -> u32 {
        id.0
    }
}

impl FromStr for PokemonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid Pokemon ID: {}", s)))?;
        Self::new(value)
    }
}
