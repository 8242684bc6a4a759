//! Loosely-typed PokeAPI payloads.
//!
//! Only the fields the catalog reads are declared; everything is optional so
//! presence checks stay with the mapper.

use serde::Deserialize;

/// `GET /pokemon/{id or name}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPokemon {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sprites: Option<RawSprites>,
    pub types: Option<Vec<RawTypeSlot>>,
    pub stats: Option<Vec<RawStat>>,
    /// Decimetres
    pub height: Option<i64>,
    /// Hectograms
    pub weight: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: Option<RawNamedResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStat {
    pub base_stat: Option<i64>,
    pub stat: Option<RawNamedResource>,
}

/// `{ "name": ..., "url": ... }` reference used throughout PokeAPI. Only the
/// name is read; lookups go through the configured base URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNamedResource {
    pub name: Option<String>,
}

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPokemonPage {
    /// Size of the whole catalog, reported in the list summary log
    pub count: Option<u64>,
    pub results: Option<Vec<RawNamedResource>>,
}
