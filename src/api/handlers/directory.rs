use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::{PokemonId, TrainerId};
use crate::domain::upstream::{PokemonRecord, TrainerRecord};

/// GET /api/trainers
pub async fn list_trainers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrainerRecord>>, ApiError> {
    let trainers = state.directory.list_trainers().await?;
    Ok(Json(trainers.as_ref().clone()))
}

/// GET /api/trainers/:id
pub async fn get_trainer(
    State(state): State<AppState>,
    Path(id): Path<TrainerId>,
) -> Result<Json<TrainerRecord>, ApiError> {
    Ok(Json(state.directory.trainer_by_id(id).await?))
}

/// GET /api/pokemon
pub async fn list_pokemon(
    State(state): State<AppState>,
) -> Result<Json<Vec<PokemonRecord>>, ApiError> {
    let pokemon = state.directory.list_pokemon().await?;
    Ok(Json(pokemon.as_ref().clone()))
}

/// GET /api/pokemon/:id
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<PokemonId>,
) -> Result<Json<PokemonRecord>, ApiError> {
    Ok(Json(state.directory.pokemon_by_id(id).await?))
}

/// POST /api/directory/refresh
pub async fn refresh_directory(State(state): State<AppState>) -> StatusCode {
    state.directory.invalidate().await;
    StatusCode::NO_CONTENT
}
