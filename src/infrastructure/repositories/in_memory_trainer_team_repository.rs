use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::id_list;
use crate::domain::repositories::{RepositoryError, TrainerTeamRepository};
use crate::domain::team::TrainerId;
use crate::domain::trainer_team::TrainerTeam;

#[derive(Debug, Clone)]
struct StoredTrainerTeam {
    seq: u64,
    trainer_id: TrainerId,
    team_ids: String,
    selected_team_id: Uuid,
}

impl StoredTrainerTeam {
    fn to_trainer_team(&self, id: Uuid) -> Result<TrainerTeam, RepositoryError> {
        Ok(TrainerTeam::new(
            id,
            self.trainer_id,
            id_list::decode(&self.team_ids)?,
            self.selected_team_id,
        ))
    }
}

#[derive(Debug, Default)]
struct Table {
    next_seq: u64,
    rows: HashMap<Uuid, StoredTrainerTeam>,
}

/// In-memory implementation of TrainerTeamRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryTrainerTeamRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTrainerTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrainerTeamRepository for InMemoryTrainerTeamRepository {
    async fn insert(
        &self,
        trainer_id: TrainerId,
        team_ids: &[Uuid],
        selected_team_id: Uuid,
    ) -> Result<Uuid, RepositoryError> {
        let team_ids = id_list::encode(team_ids)?;
        let mut table = self.table.write().await;
        let id = Uuid::new_v4();
        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(
            id,
            StoredTrainerTeam {
                seq,
                trainer_id,
                team_ids,
                selected_team_id,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TrainerTeam>, RepositoryError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .map(|stored| stored.to_trainer_team(id))
            .transpose()
    }

    async fn find_by_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> Result<Vec<TrainerTeam>, RepositoryError> {
        let table = self.table.read().await;
        let mut matching: Vec<(&Uuid, &StoredTrainerTeam)> = table
            .rows
            .iter()
            .filter(|(_, stored)| stored.trainer_id == trainer_id)
            .collect();
        matching.sort_by_key(|(_, stored)| stored.seq);

        matching
            .into_iter()
            .map(|(id, stored)| stored.to_trainer_team(*id))
            .collect()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn update(&self, record: &TrainerTeam) -> Result<bool, RepositoryError> {
        let team_ids = id_list::encode(record.team_ids())?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&record.id()) {
            Some(stored) => {
                stored.trainer_id = record.trainer_id();
                stored.team_ids = team_ids;
                stored.selected_team_id = record.selected_team_id();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
