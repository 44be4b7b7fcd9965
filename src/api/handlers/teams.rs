use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::{PokemonId, Team};

/// Trainer id as sent by clients: either `"5"` or `5`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTrainerId {
    Text(String),
    Number(i64),
}

impl RawTrainerId {
    fn into_text(self) -> String {
        match self {
            RawTrainerId::Text(text) => text,
            RawTrainerId::Number(n) => n.to_string(),
        }
    }
}

/// Request body for creating a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub entrenador_id: RawTrainerId,
    pub nombre: String,
    #[serde(default)]
    pub pokemones_ids: Vec<PokemonId>,
}

/// Request body for replacing a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    pub nombre: String,
    #[serde(default)]
    pub pokemones_ids: Vec<PokemonId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub nombre: String,
    pub pokemones_ids: Vec<PokemonId>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            nombre: team.name().to_string(),
            pokemones_ids: team.pokemon_ids().to_vec(),
        }
    }
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state
        .teams
        .create(&req.entrenador_id.into_text(), &req.nombre, req.pokemones_ids)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.get(id).await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Replace a team's name and roster
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .update(id, &req.nombre, req.pokemones_ids)
        .await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
