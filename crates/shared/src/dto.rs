//! Pokemon DTOs
//!
//! Domain -> DTO conversions live in the engine's use cases; this crate only
//! describes the shapes.

use serde::{Deserialize, Serialize};

/// Full detail view of a Pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    pub id: u32,
    /// Display name ("Pikachu")
    pub name: String,
    pub image_url: String,
    /// Display names of the types, in declared order ("Fire", "Flying")
    pub types: Vec<String>,
    pub stats: PokemonStatsDto,
    /// Meters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
}

/// Base stats including their total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonStatsDto {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
    pub total: u32,
}

/// One row of a list or search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonListItemDto {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

/// One page of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonPageDto {
    pub items: Vec<PokemonListItemDto>,
    /// 1-based page number
    pub current_page: u32,
    /// True when the page came back full, so a next page may exist
    pub has_more: bool,
}
