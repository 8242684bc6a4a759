//! Base battle stats

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lowest legal base stat value
const MIN_STAT: i64 = 0;

/// Highest legal base stat value
const MAX_STAT: i64 = 255;

/// The six base stats of a Pokemon, each within 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonStats {
    hp: u8,
    attack: u8,
    defense: u8,
    special_attack: u8,
    special_defense: u8,
    speed: u8,
}

impl PokemonStats {
    /// Create a validated stat block.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first stat outside 0..=255.
    pub fn new(
        hp: i64,
        attack: i64,
        defense: i64,
        special_attack: i64,
        special_defense: i64,
        speed: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            hp: checked("HP", hp)?,
            attack: checked("Attack", attack)?,
            defense: checked("Defense", defense)?,
            special_attack: checked("Special Attack", special_attack)?,
            special_defense: checked("Special Defense", special_defense)?,
            speed: checked("Speed", speed)?,
        })
    }

    #[inline]
    pub fn hp(&self) -> u8 {
        self.hp
    }

    #[inline]
    pub fn attack(&self) -> u8 {
        self.attack
    }

    #[inline]
    pub fn defense(&self) -> u8 {
        self.defense
    }

    #[inline]
    pub fn special_attack(&self) -> u8 {
        self.special_attack
    }

    #[inline]
    pub fn special_defense(&self) -> u8 {
        self.special_defense
    }

    #[inline]
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Sum of all six stats.
    pub fn total(&self) -> u32 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .iter()
        .map(|&v| u32::from(v))
        .sum()
    }
}

fn checked(label: &str, value: i64) -> Result<u8, DomainError> {
    if !(MIN_STAT..=MAX_STAT).contains(&value) {
        return Err(DomainError::validation(format!(
            "{} must be between {} and {}, got {}",
            label, MIN_STAT, MAX_STAT, value
        )));
    }
    u8::try_from(value).map_err(|_| DomainError::validation(format!("{} out of range", label)))
}
