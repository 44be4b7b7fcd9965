//! Text encoding of id lists at the storage boundary
//!
//! Rosters and team-id lists are kept in a single text column as a JSON
//! array, e.g. `[1,4,7]`. `decode(encode(xs)) == xs` for every list.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::repositories::RepositoryError;

pub fn encode<T: Serialize>(ids: &[T]) -> Result<String, RepositoryError> {
    Ok(serde_json::to_string(ids)?)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, RepositoryError> {
    Ok(serde_json::from_str(text)?)
}
