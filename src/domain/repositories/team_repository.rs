use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::team::{PokemonId, Team};

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team and return its generated ID
    async fn insert(&self, name: &str, pokemon_ids: &[PokemonId]) -> Result<Uuid, RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// Whether a team with this ID is stored
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Replace name and roster; `false` if no such team
    async fn update(&self, team: &Team) -> Result<bool, RepositoryError>;

    /// Delete a team by ID; `false` if no such team
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
