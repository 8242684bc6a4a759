//! Raw PokeAPI record -> `Pokemon`.

use pokedex_domain::{Pokemon, PokemonId, PokemonName, PokemonStats, PokemonType};
use serde::Deserialize;
use serde_json::Value;

use crate::infrastructure::pokeapi_types::{RawPokemon, RawSprites, RawStat, RawTypeSlot};
use crate::infrastructure::ports::MappingError;

/// Top-level fields a record must carry, in the order they are checked.
const REQUIRED_FIELDS: [&str; 7] = ["id", "name", "sprites", "types", "stats", "height", "weight"];

/// Stateless translator from PokeAPI JSON to the domain aggregate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PokemonMapper;

impl PokemonMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build a `Pokemon` from one `/pokemon/{id}` record.
    ///
    /// Height and weight arrive in decimetres and hectograms and are divided
    /// by ten. Unknown type tags are dropped; absent stats count as 0.
    pub fn map(&self, raw: &Value) -> Result<Pokemon, MappingError> {
        let object = raw
            .as_object()
            .ok_or_else(|| MappingError::invalid_payload("expected a JSON object"))?;

        if let Some(field) = REQUIRED_FIELDS
            .iter()
            .find(|field| object.get(**field).map_or(true, Value::is_null))
        {
            return Err(MappingError::MissingField(*field));
        }

        let record = RawPokemon::deserialize(raw).map_err(MappingError::invalid_payload)?;

        let id = PokemonId::new(record.id.ok_or(MappingError::MissingField("id"))?)?;
        let name = PokemonName::new(record.name.ok_or(MappingError::MissingField("name"))?)?;
        let height = record.height.ok_or(MappingError::MissingField("height"))?;
        let weight = record.weight.ok_or(MappingError::MissingField("weight"))?;

        Ok(Pokemon::new(
            id,
            name,
            image_url(record.sprites.as_ref()),
            types(record.types.as_deref().unwrap_or_default()),
            stats(record.stats.as_deref().unwrap_or_default())?,
            height as f64 / 10.0,
            weight as f64 / 10.0,
        ))
    }
}

/// Official artwork, then the default front sprite, then empty.
fn image_url(sprites: Option<&RawSprites>) -> String {
    let Some(sprites) = sprites else {
        return String::new();
    };

    sprites
        .other
        .as_ref()
        .and_then(|other| other.official_artwork.as_ref())
        .and_then(|artwork| artwork.front_default.clone())
        .or_else(|| sprites.front_default.clone())
        .unwrap_or_default()
}

fn types(slots: &[RawTypeSlot]) -> Vec<PokemonType> {
    slots
        .iter()
        .filter_map(|slot| slot.kind.as_ref()?.name.as_deref())
        .filter_map(|tag| match PokemonType::new(tag) {
            Ok(kind) => Some(kind),
            Err(e) => {
                tracing::warn!(tag = %tag, error = %e, "Skipping unknown Pokemon type");
                None
            }
        })
        .collect()
}

fn stats(entries: &[RawStat]) -> Result<PokemonStats, MappingError> {
    let (mut hp, mut attack, mut defense) = (0, 0, 0);
    let (mut special_attack, mut special_defense, mut speed) = (0, 0, 0);

    for entry in entries {
        let Some(name) = entry.stat.as_ref().and_then(|s| s.name.as_deref()) else {
            continue;
        };
        let value = entry.base_stat.unwrap_or(0);
        match name {
            "hp" => hp = value,
            "attack" => attack = value,
            "defense" => defense = value,
            "special-attack" => special_attack = value,
            "special-defense" => special_defense = value,
            "speed" => speed = value,
            _ => {}
        }
    }

    PokemonStats::new(
        hp,
        attack,
        defense,
        special_attack,
        special_defense,
        speed,
    )
    .map_err(MappingError::from)
}
