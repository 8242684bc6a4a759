//! Validated Pokemon name
//!
//! Names are canonical by construction:
//! - Trimmed of leading/trailing whitespace
//! - Lowercased, so equality is case-insensitive
//! - Non-empty and at most 100 characters

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a Pokemon name
const MAX_NAME_LENGTH: usize = 100;

/// A validated Pokemon name (non-empty, <=100 chars, trimmed, lowercase)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PokemonName(String);

impl PokemonName {
    /// Create a new validated Pokemon name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Pokemon name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Pokemon name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the canonical (lowercase) name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with the first character capitalized ("pikachu" -> "Pikachu").
    pub fn formatted(&self) -> String {
        capitalize(&self.0)
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PokemonName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PokemonName> for String {
    fn from(name: PokemonName) -> String {
        name.0
    }
}
