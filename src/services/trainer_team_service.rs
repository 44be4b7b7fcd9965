use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use super::errors::{ServiceError, ServiceResult};
use crate::domain::oracle::ExistenceOracle;
use crate::domain::repositories::{TeamRepository, TrainerTeamRepository};
use crate::domain::team::TrainerId;
use crate::domain::trainer_team::TrainerTeam;

/// Owns the TrainerTeam lifecycle, including the cascade to member teams
///
/// Team ids handed to `create`/`update` are trusted as-is; they are not
/// looked up in the team store.
pub struct TrainerTeamService {
    trainer_teams: Arc<dyn TrainerTeamRepository>,
    teams: Arc<dyn TeamRepository>,
    trainer_oracle: Arc<dyn ExistenceOracle>,
    validate_trainer_on_create: bool,
}

impl TrainerTeamService {
    pub fn new(
        trainer_teams: Arc<dyn TrainerTeamRepository>,
        teams: Arc<dyn TeamRepository>,
        trainer_oracle: Arc<dyn ExistenceOracle>,
    ) -> Self {
        Self {
            trainer_teams,
            teams,
            trainer_oracle,
            validate_trainer_on_create: false,
        }
    }

    /// Reject `create` when the trainer oracle does not confirm the trainer
    pub fn with_trainer_validation(mut self, enabled: bool) -> Self {
        self.validate_trainer_on_create = enabled;
        self
    }

    /// Whether the trainer exists upstream (fail closed)
    pub async fn trainer_exists(&self, trainer_id: TrainerId) -> bool {
        self.trainer_oracle.exists(trainer_id).await
    }

    /// Records the teams a trainer owns and the selected one
    pub async fn create(
        &self,
        trainer_id: TrainerId,
        team_ids: Vec<Uuid>,
        selected_team_id: Uuid,
    ) -> ServiceResult<TrainerTeam> {
        if self.validate_trainer_on_create && !self.trainer_exists(trainer_id).await {
            return Err(ServiceError::Validation(format!(
                "Trainer does not exist: {}",
                trainer_id
            )));
        }

        let id = self
            .trainer_teams
            .insert(trainer_id, &team_ids, selected_team_id)
            .await
            .map_err(|e| {
                ServiceError::storage("Error saving trainer team to the database", e)
            })?;

        let record = TrainerTeam::new(id, trainer_id, team_ids, selected_team_id);
        warn_on_foreign_selection(&record);

        info!(trainer_team_id = %id, trainer_id, "Trainer team created");

        Ok(record)
    }

    /// Fetches a trainer team by ID
    pub async fn get(&self, trainer_team_id: Uuid) -> ServiceResult<TrainerTeam> {
        self.trainer_teams
            .find_by_id(trainer_team_id)
            .await
            .map_err(|e| ServiceError::storage("Error fetching trainer team", e))?
            .ok_or_else(|| trainer_team_not_found(trainer_team_id))
    }

    /// Lists every record for a trainer
    ///
    /// An empty result is reported as `NotFound`, not as an empty list.
    pub async fn list_by_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> ServiceResult<Vec<TrainerTeam>> {
        let records = self
            .trainer_teams
            .find_by_trainer(trainer_id)
            .await
            .map_err(|e| ServiceError::storage("Error fetching teams for trainer", e))?;

        if records.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No teams found for trainer: {}",
                trainer_id
            )));
        }

        Ok(records)
    }

    /// Replaces every field of a trainer team
    pub async fn update(
        &self,
        trainer_team_id: Uuid,
        trainer_id: TrainerId,
        team_ids: Vec<Uuid>,
        selected_team_id: Uuid,
    ) -> ServiceResult<TrainerTeam> {
        let exists = self
            .trainer_teams
            .exists(trainer_team_id)
            .await
            .map_err(|e| ServiceError::storage("Error fetching trainer team", e))?;
        if !exists {
            return Err(trainer_team_not_found(trainer_team_id));
        }

        let record = TrainerTeam::new(trainer_team_id, trainer_id, team_ids, selected_team_id);
        warn_on_foreign_selection(&record);

        let updated = self
            .trainer_teams
            .update(&record)
            .await
            .map_err(|e| ServiceError::storage("Error updating trainer team", e))?;
        if !updated {
            return Err(trainer_team_not_found(trainer_team_id));
        }

        info!(trainer_team_id = %trainer_team_id, "Trainer team updated");

        Ok(record)
    }

    /// Deletes a trainer team and every team it references
    ///
    /// Member teams are deleted one at a time, in stored order. A failure
    /// stops the cascade where it is: teams already deleted stay deleted and
    /// the trainer team itself is kept.
    pub async fn delete(&self, trainer_team_id: Uuid) -> ServiceResult<()> {
        let record = self.get(trainer_team_id).await?;

        for &team_id in record.team_ids() {
            match self.teams.delete(team_id).await {
                Ok(true) => info!(team_id = %team_id, "Team deleted"),
                Ok(false) => warn!(
                    team_id = %team_id,
                    trainer_team_id = %trainer_team_id,
                    "Referenced team already gone"
                ),
                Err(e) => {
                    error!(
                        team_id = %team_id,
                        trainer_team_id = %trainer_team_id,
                        "Cascade delete aborted"
                    );
                    return Err(ServiceError::storage("Error deleting trainer team", e));
                }
            }
        }

        self.trainer_teams
            .delete(trainer_team_id)
            .await
            .map_err(|e| ServiceError::storage("Error deleting trainer team", e))?;

        info!(trainer_team_id = %trainer_team_id, "Trainer team deleted");

        Ok(())
    }
}

fn warn_on_foreign_selection(record: &TrainerTeam) {
    if !record.selection_is_member() {
        warn!(
            trainer_team_id = %record.id(),
            selected_team_id = %record.selected_team_id(),
            "Selected team is not one of the trainer's teams"
        );
    }
}

fn trainer_team_not_found(trainer_team_id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Trainer team not found: {}", trainer_team_id))
}
