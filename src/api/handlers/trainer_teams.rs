use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::TrainerId;
use crate::domain::trainer_team::TrainerTeam;

/// Request body for creating or replacing a trainer team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerTeamRequest {
    pub entrenador_id: TrainerId,
    #[serde(default)]
    pub equipos_ids: Vec<Uuid>,
    pub equipo_seleccionado: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerTeamResponse {
    pub id: Uuid,
    pub entrenador_id: TrainerId,
    pub equipos_ids: Vec<Uuid>,
    pub equipo_seleccionado: Uuid,
}

impl From<&TrainerTeam> for TrainerTeamResponse {
    fn from(record: &TrainerTeam) -> Self {
        Self {
            id: record.id(),
            entrenador_id: record.trainer_id(),
            equipos_ids: record.team_ids().to_vec(),
            equipo_seleccionado: record.selected_team_id(),
        }
    }
}

/// POST /api/trainer-teams
pub async fn create_trainer_team(
    State(state): State<AppState>,
    Json(req): Json<TrainerTeamRequest>,
) -> Result<(StatusCode, Json<TrainerTeamResponse>), ApiError> {
    let record = state
        .trainer_teams
        .create(req.entrenador_id, req.equipos_ids, req.equipo_seleccionado)
        .await?;

    Ok((StatusCode::CREATED, Json(TrainerTeamResponse::from(&record))))
}

/// GET /api/trainer-teams/:id
pub async fn get_trainer_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrainerTeamResponse>, ApiError> {
    let record = state.trainer_teams.get(id).await?;
    Ok(Json(TrainerTeamResponse::from(&record)))
}

/// GET /api/trainer-teams/trainer/:trainer_id
pub async fn get_trainer_teams_by_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<TrainerId>,
) -> Result<Json<Vec<TrainerTeamResponse>>, ApiError> {
    let records = state.trainer_teams.list_by_trainer(trainer_id).await?;
    Ok(Json(records.iter().map(TrainerTeamResponse::from).collect()))
}

/// PUT /api/trainer-teams/:id
pub async fn update_trainer_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TrainerTeamRequest>,
) -> Result<Json<TrainerTeamResponse>, ApiError> {
    let record = state
        .trainer_teams
        .update(id, req.entrenador_id, req.equipos_ids, req.equipo_seleccionado)
        .await?;
    Ok(Json(TrainerTeamResponse::from(&record)))
}

/// DELETE /api/trainer-teams/:id
///
/// Also deletes every team the record references.
pub async fn delete_trainer_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.trainer_teams.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
