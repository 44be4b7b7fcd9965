use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::id_list;
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{PokemonId, Team};

/// PostgreSQL implementation of TeamRepository
///
/// Rosters live in the `pokemon_ids` text column as a JSON array.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    pokemon_ids: String,
}

impl TeamRow {
    fn into_team(self) -> Result<Team, RepositoryError> {
        let pokemon_ids = id_list::decode(&self.pokemon_ids)?;
        Ok(Team::from_persistence(self.id, self.name, pokemon_ids))
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert(&self, name: &str, pokemon_ids: &[PokemonId]) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, pokemon_ids)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(id_list::encode(pokemon_ids)?)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, pokemon_ids
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TeamRow::into_team).transpose()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let found: Option<Uuid> = sqlx::query_scalar("SELECT id FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    async fn update(&self, team: &Team) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = $2, pokemon_ids = $3
            WHERE id = $1
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(id_list::encode(team.pokemon_ids())?)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
