//! Shared test data: PokeAPI-shaped JSON and ready-made domain objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{pikachu, raw_pokemon_json};
//!
//! #[test]
//! fn maps_charizard() {
//!     let raw = raw_pokemon_json(6, "charizard", &["fire", "flying"]);
//!     // ... test logic
//! }
//! ```

use pokedex_domain::{Pokemon, PokemonId, PokemonName, PokemonStats, PokemonType};
use serde_json::{json, Value};

// =============================================================================
// PokeAPI JSON
// =============================================================================

/// A `/pokemon/{id}` record with every field the mapper reads.
///
/// Stats are fixed (35/55/40/50/50/90), height 4 dm, weight 60 hg.
pub fn raw_pokemon_json(id: i64, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            json!({
                "slot": i + 1,
                "type": {"name": tag, "url": format!("https://pokeapi.co/api/v2/type/{}/", tag)}
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": format!(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{}.png",
                id
            ),
            "other": {
                "official-artwork": {
                    "front_default": format!(
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{}.png",
                        id
                    )
                }
            }
        },
        "types": types,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack"}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense"}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack"}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed"}}
        ]
    })
}

pub fn pikachu_json() -> Value {
    raw_pokemon_json(25, "pikachu", &["electric"])
}

/// A `/pokemon?limit=&offset=` page listing `names` in order.
pub fn raw_page_json(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", name),
            })
        })
        .collect();

    json!({
        "count": 1302,
        "next": null,
        "previous": null,
        "results": results
    })
}

// =============================================================================
// Domain objects
// =============================================================================

pub fn pokemon(id: i64, name: &str, types: Vec<PokemonType>) -> Pokemon {
    Pokemon::new(
        PokemonId::new(id).expect("valid fixture id"),
        PokemonName::new(name).expect("valid fixture name"),
        format!("https://example.com/{}.png", id),
        types,
        PokemonStats::new(35, 55, 40, 50, 50, 90).expect("valid fixture stats"),
        0.4,
        6.0,
    )
}

pub fn pikachu() -> Pokemon {
    pokemon(25, "pikachu", vec![PokemonType::Electric])
}
