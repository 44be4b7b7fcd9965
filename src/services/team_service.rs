use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};
use uuid::Uuid;

use super::errors::{ServiceError, ServiceResult};
use crate::domain::oracle::ExistenceOracle;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::value_objects::parse_trainer_id;
use crate::domain::team::{PokemonId, Roster, Team, TeamName};

/// Owns the Team lifecycle
///
/// Enforces the roster limit and checks every Pokémon against the
/// existence oracle before anything is written.
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    pokemon_oracle: Arc<dyn ExistenceOracle>,
}

impl TeamService {
    pub fn new(
        repository: Arc<dyn TeamRepository>,
        pokemon_oracle: Arc<dyn ExistenceOracle>,
    ) -> Self {
        Self {
            repository,
            pokemon_oracle,
        }
    }

    /// Creates a team for a trainer
    ///
    /// # Errors
    /// * `Validation` - trainer id is not an integer, roster has more than
    ///   six Pokémon, name is blank, or any Pokémon is unknown upstream
    /// * `Storage` - the team could not be saved
    pub async fn create(
        &self,
        trainer_id: &str,
        name: &str,
        pokemon_ids: Vec<PokemonId>,
    ) -> ServiceResult<Team> {
        let trainer_id = parse_trainer_id(trainer_id).map_err(ServiceError::Validation)?;
        let roster = Roster::new(pokemon_ids).map_err(ServiceError::Validation)?;
        let name = TeamName::new(name).map_err(ServiceError::Validation)?;

        let missing = self.missing_pokemon(roster.ids()).await;
        if !missing.is_empty() {
            warn!(trainer_id, ?missing, "Rejecting team with unknown Pokémon");
            return Err(ServiceError::Validation(
                "At least one of the Pokémon does not exist".to_string(),
            ));
        }

        let id = self
            .repository
            .insert(name.as_str(), roster.ids())
            .await
            .map_err(|e| ServiceError::storage("Error saving team to the database", e))?;

        info!(team_id = %id, trainer_id, "Team created");

        Ok(Team::new(id, name, roster))
    }

    /// Fetches a team by ID
    pub async fn get(&self, team_id: Uuid) -> ServiceResult<Team> {
        self.repository
            .find_by_id(team_id)
            .await
            .map_err(|e| ServiceError::storage("Error fetching team", e))?
            .ok_or_else(|| team_not_found(team_id))
    }

    /// Replaces a team's name and roster
    ///
    /// Pokémon are checked against the oracle but unknown ids do not block
    /// the update; they are only logged.
    pub async fn update(
        &self,
        team_id: Uuid,
        name: &str,
        pokemon_ids: Vec<PokemonId>,
    ) -> ServiceResult<Team> {
        let roster = Roster::new(pokemon_ids).map_err(ServiceError::Validation)?;
        let name = TeamName::new(name).map_err(ServiceError::Validation)?;

        let missing = self.missing_pokemon(roster.ids()).await;
        if !missing.is_empty() {
            warn!(team_id = %team_id, ?missing, "Updating team with Pokémon unknown upstream");
        }

        if !self.team_exists(team_id).await? {
            return Err(team_not_found(team_id));
        }

        let team = Team::new(team_id, name, roster);
        let updated = self
            .repository
            .update(&team)
            .await
            .map_err(|e| ServiceError::storage("Error updating team", e))?;

        // Removed between the existence check and the write
        if !updated {
            return Err(team_not_found(team_id));
        }

        info!(team_id = %team_id, "Team updated");

        Ok(team)
    }

    /// Deletes a team
    pub async fn delete(&self, team_id: Uuid) -> ServiceResult<()> {
        if !self.team_exists(team_id).await? {
            return Err(team_not_found(team_id));
        }

        self.repository
            .delete(team_id)
            .await
            .map_err(|e| ServiceError::storage("Error deleting team", e))?;

        info!(team_id = %team_id, "Team deleted");

        Ok(())
    }

    async fn team_exists(&self, team_id: Uuid) -> ServiceResult<bool> {
        self.repository
            .exists(team_id)
            .await
            .map_err(|e| ServiceError::storage("Error fetching team", e))
    }

    /// Checks every id concurrently and returns those not confirmed upstream
    ///
    /// All checks run to completion; there is no short-circuit on the first
    /// miss.
    async fn missing_pokemon(&self, pokemon_ids: &[PokemonId]) -> Vec<PokemonId> {
        let oracle = &self.pokemon_oracle;
        let checks = pokemon_ids
            .iter()
            .map(|&id| async move { (id, oracle.exists(id).await) });

        join_all(checks)
            .await
            .into_iter()
            .filter(|(_, exists)| !exists)
            .map(|(id, _)| id)
            .collect()
    }
}

fn team_not_found(team_id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Team not found: {}", team_id))
}
