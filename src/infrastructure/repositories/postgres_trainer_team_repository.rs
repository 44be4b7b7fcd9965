use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::id_list;
use crate::domain::repositories::{RepositoryError, TrainerTeamRepository};
use crate::domain::team::TrainerId;
use crate::domain::trainer_team::TrainerTeam;

/// PostgreSQL implementation of TrainerTeamRepository
pub struct PostgresTrainerTeamRepository {
    pool: PgPool,
}

impl PostgresTrainerTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TrainerTeamRow {
    id: Uuid,
    trainer_id: i64,
    team_ids: String,
    selected_team_id: Uuid,
}

impl TrainerTeamRow {
    fn into_trainer_team(self) -> Result<TrainerTeam, RepositoryError> {
        let team_ids = id_list::decode(&self.team_ids)?;
        Ok(TrainerTeam::new(
            self.id,
            self.trainer_id,
            team_ids,
            self.selected_team_id,
        ))
    }
}

#[async_trait]
impl TrainerTeamRepository for PostgresTrainerTeamRepository {
    async fn insert(
        &self,
        trainer_id: TrainerId,
        team_ids: &[Uuid],
        selected_team_id: Uuid,
    ) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO trainer_teams (id, trainer_id, team_ids, selected_team_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(trainer_id)
        .bind(id_list::encode(team_ids)?)
        .bind(selected_team_id)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TrainerTeam>, RepositoryError> {
        let row = sqlx::query_as::<_, TrainerTeamRow>(
            r#"
            SELECT id, trainer_id, team_ids, selected_team_id
            FROM trainer_teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TrainerTeamRow::into_trainer_team).transpose()
    }

    async fn find_by_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> Result<Vec<TrainerTeam>, RepositoryError> {
        let rows = sqlx::query_as::<_, TrainerTeamRow>(
            r#"
            SELECT id, trainer_id, team_ids, selected_team_id
            FROM trainer_teams
            WHERE trainer_id = $1
            ORDER BY seq
            "#,
        )
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(TrainerTeamRow::into_trainer_team)
            .collect()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let found: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM trainer_teams WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    async fn update(&self, record: &TrainerTeam) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE trainer_teams
            SET trainer_id = $2, team_ids = $3, selected_team_id = $4
            WHERE id = $1
            "#,
        )
        .bind(record.id())
        .bind(record.trainer_id())
        .bind(id_list::encode(record.team_ids())?)
        .bind(record.selected_team_id())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM trainer_teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
