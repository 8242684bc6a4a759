//! Pokemon aggregate - one creature as described by PokeAPI
//!
//! The aggregate is immutable: it is built fresh from every fetch and never
//! modified afterwards. A "change" means constructing a new instance.

use serde::{Deserialize, Serialize};

use crate::value_objects::{PokemonId, PokemonName, PokemonStats, PokemonType};

/// A Pokemon with everything the catalog shows about it
///
/// # Invariants
///
/// - `id` is always >= 1 (enforced by `PokemonId`)
/// - `name` is always non-empty, lowercase and <= 100 characters (enforced by `PokemonName`)
/// - every stat is within 0..=255 (enforced by `PokemonStats`)
/// - `types` keeps the declared order; duplicates are not removed
///
/// # Example
///
/// ```
/// use pokedex_domain::{Pokemon, PokemonId, PokemonName, PokemonStats, PokemonType};
///
/// let pikachu = Pokemon::new(
///     PokemonId::new(25).unwrap(),
///     PokemonName::new("Pikachu").unwrap(),
///     "https://example.com/pikachu.png",
///     vec![PokemonType::Electric],
///     PokemonStats::new(35, 55, 40, 50, 50, 90).unwrap(),
///     0.4,
///     6.0,
/// );
///
/// assert_eq!(pikachu.name().as_str(), "pikachu");
/// assert_eq!(pikachu.formatted_height(), "0.4 m");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    id: PokemonId,
    name: PokemonName,
    /// Artwork URL; empty when PokeAPI has no sprite for this Pokemon
    image_url: String,
    types: Vec<PokemonType>,
    stats: PokemonStats,
    /// Height in meters
    height: f64,
    /// Weight in kilograms
    weight: f64,
}

impl Pokemon {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a Pokemon from pre-validated value objects.
    ///
    /// Validation happens when the value objects are built, not here.
    pub fn new(
        id: PokemonId,
        name: PokemonName,
        image_url: impl Into<String>,
        types: Vec<PokemonType>,
        stats: PokemonStats,
        height: f64,
        weight: f64,
    ) -> Self {
        Self {
            id,
            name,
            image_url: image_url.into(),
            types,
            stats,
            height,
            weight,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PokemonId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &PokemonName {
        &self.name
    }

    #[inline]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[inline]
    pub fn types(&self) -> &[PokemonType] {
        &self.types
    }

    #[inline]
    pub fn stats(&self) -> &PokemonStats {
        &self.stats
    }

    /// Height in meters.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    // =========================================================================
    // Display helpers
    // =========================================================================

    /// Height with one decimal, e.g. "0.4 m".
    pub fn formatted_height(&self) -> String {
        format!("{:.1} m", self.height)
    }

    /// Weight with one decimal, e.g. "6.0 kg".
    pub fn formatted_weight(&self) -> String {
        format!("{:.1} kg", self.weight)
    }

    /// Reduced view used by list and search results.
    pub fn to_list_item(&self) -> PokemonListItem {
        PokemonListItem {
            id: self.id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Projection of a `Pokemon` for list and search views.
///
/// Not a separate source of truth: always derived from a full `Pokemon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonListItem {
    pub id: PokemonId,
    pub name: PokemonName,
    pub image_url: String,
}

impl From<&Pokemon> for PokemonListItem {
    fn from(pokemon: &Pokemon) -> Self {
        pokemon.to_list_item()
    }
}
