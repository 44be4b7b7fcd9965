use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::id_list;
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{PokemonId, Team};

/// Row as it would sit in the `teams` table
#[derive(Debug, Clone)]
struct StoredTeam {
    name: String,
    pokemon_ids: String,
}

/// In-memory implementation of TeamRepository
///
/// Used when no database is configured. Rosters are kept in their encoded
/// text form, same as the Postgres table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<Uuid, StoredTeam>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored teams
    pub async fn len(&self) -> usize {
        self.teams.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.teams.read().await.is_empty()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, name: &str, pokemon_ids: &[PokemonId]) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let stored = StoredTeam {
            name: name.to_string(),
            pokemon_ids: id_list::encode(pokemon_ids)?,
        };
        self.teams.write().await.insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        teams
            .get(&id)
            .map(|stored| -> Result<Team, RepositoryError> {
                let pokemon_ids = id_list::decode(&stored.pokemon_ids)?;
                Ok(Team::from_persistence(id, stored.name.clone(), pokemon_ids))
            })
            .transpose()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.teams.read().await.contains_key(&id))
    }

    async fn update(&self, team: &Team) -> Result<bool, RepositoryError> {
        let mut teams = self.teams.write().await;
        match teams.get_mut(&team.id()) {
            Some(stored) => {
                stored.name = team.name().to_string();
                stored.pokemon_ids = id_list::encode(team.pokemon_ids())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.teams.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() {
        let repo = InMemoryTeamRepository::new();

        let id = repo.insert("Ash Team", &[1, 4, 7]).await.unwrap();
        let team = repo.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "Ash Team");
        assert_eq!(team.pokemon_ids(), &[1, 4, 7]);
        assert!(repo.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = InMemoryTeamRepository::new();
        let ghost = Team::from_persistence(Uuid::new_v4(), "Ghost".to_string(), vec![]);

        assert!(!repo.update(&ghost).await.unwrap());
        assert!(!repo.delete(ghost.id()).await.unwrap());
    }

    #[tokio::test]
    async fn update_replaces_name_and_roster() {
        let repo = InMemoryTeamRepository::new();
        let id = repo.insert("Before", &[1]).await.unwrap();

        let replacement = Team::from_persistence(id, "After".to_string(), vec![6, 5]);
        assert!(repo.update(&replacement).await.unwrap());

        let team = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(team.name(), "After");
        assert_eq!(team.pokemon_ids(), &[6, 5]);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let repo = InMemoryTeamRepository::new();
        let id = repo.insert("Gone", &[]).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }
}
