//! Typed records for the upstream trainer and Pokémon directories
//!
//! Upstream services answer with envelopes such as `{"trainers": [...]}` and
//! `{"pokemones": [...]}`. Payloads are checked here, at the boundary, so the
//! rest of the crate never handles untyped JSON.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::team::{PokemonId, TrainerId};

/// A malformed upstream payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpstreamFormatError {
    #[error("response has no `{0}` list")]
    MissingList(&'static str),

    #[error("malformed {kind} record at index {index}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        index: usize,
        reason: String,
    },
}

/// Failure fetching a directory from upstream
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream payload rejected: {0}")]
    Format(#[from] UpstreamFormatError),
}

/// A trainer as published by the trainers service
///
/// Only `id` and `nombre` are checked; every other upstream field is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerRecord {
    pub id: TrainerId,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Base stats block of a Pokémon record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStats {
    pub hp: u32,
    #[serde(rename = "ataque")]
    pub attack: u32,
    #[serde(rename = "defensa")]
    pub defense: u32,
    #[serde(rename = "ataque_especial")]
    pub special_attack: u32,
    #[serde(rename = "defensa_especial")]
    pub special_defense: u32,
    #[serde(rename = "velocidad")]
    pub speed: u32,
}

/// A Pokémon as published by the Pokémon service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: PokemonId,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "tipos", default)]
    pub types: Vec<String>,
    #[serde(rename = "nivel", default)]
    pub level: Option<u32>,
    #[serde(rename = "estadisticas", default)]
    pub stats: Option<PokemonStats>,
    #[serde(rename = "movimientos", default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parses a `{"trainers": [...]}` payload
pub fn parse_trainer_list(payload: Value) -> Result<Vec<TrainerRecord>, UpstreamFormatError> {
    let records: Vec<TrainerRecord> = parse_list(payload, "trainers", "trainer")?;
    check_records(&records, "trainer", |r| (r.id, r.name.as_str()))?;
    Ok(records)
}

/// Parses a `{"pokemones": [...]}` payload
pub fn parse_pokemon_list(payload: Value) -> Result<Vec<PokemonRecord>, UpstreamFormatError> {
    let records: Vec<PokemonRecord> = parse_list(payload, "pokemones", "pokemon")?;
    check_records(&records, "pokemon", |r| (r.id, r.name.as_str()))?;
    Ok(records)
}

fn parse_list<T: serde::de::DeserializeOwned>(
    mut payload: Value,
    field: &'static str,
    kind: &'static str,
) -> Result<Vec<T>, UpstreamFormatError> {
    let items = match payload.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(UpstreamFormatError::MissingList(field)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| UpstreamFormatError::InvalidRecord {
                kind,
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn check_records<T>(
    records: &[T],
    kind: &'static str,
    key: impl Fn(&T) -> (i64, &str),
) -> Result<(), UpstreamFormatError> {
    for (index, record) in records.iter().enumerate() {
        let (id, name) = key(record);
        if id <= 0 {
            return Err(UpstreamFormatError::InvalidRecord {
                kind,
                index,
                reason: format!("id must be positive, got {}", id),
            });
        }
        if name.trim().is_empty() {
            return Err(UpstreamFormatError::InvalidRecord {
                kind,
                index,
                reason: "name is empty".to_string(),
            });
        }
    }
    Ok(())
}

/// Source of the full trainer and Pokémon directories
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_trainers(&self) -> Result<Vec<TrainerRecord>, UpstreamError>;

    async fn fetch_pokemon(&self) -> Result<Vec<PokemonRecord>, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_trainer_list() {
        let payload = json!({
            "trainers": [
                { "id": 1, "nombre": "Ash" },
                { "id": 2, "name": "Misty" }
            ]
        });

        let trainers = parse_trainer_list(payload).unwrap();

        assert_eq!(trainers.len(), 2);
        assert_eq!(trainers[0].name, "Ash");
        assert_eq!(trainers[1].name, "Misty");
    }

    #[test]
    fn parses_pokemon_with_optional_fields() {
        let payload = json!({
            "pokemones": [
                {
                    "id": 25,
                    "nombre": "Pikachu",
                    "tipos": ["electric"],
                    "nivel": 12,
                    "estadisticas": {
                        "hp": 35, "ataque": 55, "defensa": 40,
                        "ataque_especial": 50, "defensa_especial": 50, "velocidad": 90
                    },
                    "movimientos": ["thunder-shock"],
                    "sprite": "https://example.com/25.png"
                },
                { "id": 1, "nombre": "Bulbasaur" }
            ]
        });

        let pokemon = parse_pokemon_list(payload).unwrap();

        assert_eq!(pokemon[0].types, vec!["electric".to_string()]);
        assert_eq!(pokemon[0].stats.as_ref().map(|s| s.speed), Some(90));
        assert_eq!(pokemon[1].level, None);
        assert!(pokemon[1].moves.is_empty());
    }

    #[test]
    fn unknown_trainer_fields_survive_a_round_trip() {
        let payload = json!({
            "trainers": [{
                "id": 7,
                "nombre": "Brock",
                "region": "Kanto",
                "medallas": ["roca"]
            }]
        });

        let trainers = parse_trainer_list(payload).unwrap();

        assert_eq!(trainers[0].name, "Brock");
        assert_eq!(trainers[0].extra.get("region"), Some(&json!("Kanto")));
        assert!(!trainers[0].extra.contains_key("nombre"));

        let published = serde_json::to_value(&trainers[0]).unwrap();
        assert_eq!(
            published,
            json!({ "id": 7, "nombre": "Brock", "region": "Kanto", "medallas": ["roca"] })
        );
    }

    #[test]
    fn missing_envelope_is_rejected() {
        let err = parse_trainer_list(json!({ "data": [] })).unwrap_err();
        assert_eq!(err, UpstreamFormatError::MissingList("trainers"));

        let err = parse_pokemon_list(json!({ "pokemones": "nope" })).unwrap_err();
        assert_eq!(err, UpstreamFormatError::MissingList("pokemones"));
    }

    #[test]
    fn wrongly_typed_record_reports_index() {
        let payload = json!({
            "trainers": [
                { "id": 1, "nombre": "Ash" },
                { "id": "two", "nombre": "Brock" }
            ]
        });

        match parse_trainer_list(payload).unwrap_err() {
            UpstreamFormatError::InvalidRecord { kind, index, .. } => {
                assert_eq!(kind, "trainer");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_positive_id_and_blank_name_are_rejected() {
        let zero_id = json!({ "trainers": [{ "id": 0, "nombre": "Zero" }] });
        let blank_name = json!({ "pokemones": [{ "id": 4, "nombre": "  " }] });

        assert!(parse_trainer_list(zero_id).is_err());
        assert!(parse_pokemon_list(blank_name).is_err());
    }
}
