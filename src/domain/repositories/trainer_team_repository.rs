use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::team::TrainerId;
use crate::domain::trainer_team::TrainerTeam;

/// Repository trait for TrainerTeam records
#[async_trait]
pub trait TrainerTeamRepository: Send + Sync {
    /// Insert a new record and return its generated ID
    async fn insert(
        &self,
        trainer_id: TrainerId,
        team_ids: &[Uuid],
        selected_team_id: Uuid,
    ) -> Result<Uuid, RepositoryError>;

    /// Find a record by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TrainerTeam>, RepositoryError>;

    /// Find all records for a trainer
    async fn find_by_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> Result<Vec<TrainerTeam>, RepositoryError>;

    /// Whether a record with this ID is stored
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Replace every field; `false` if no such record
    async fn update(&self, record: &TrainerTeam) -> Result<bool, RepositoryError>;

    /// Delete a record by ID; `false` if no such record
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
