use super::value_objects::{PokemonId, Roster, TeamName};
use uuid::Uuid;

/// Team aggregate root
///
/// A named roster of at most six Pokémon references.
///
/// # Invariants
/// - Name is trimmed and non-empty
/// - Roster never exceeds six Pokémon
/// - The id is assigned by the store and never changes
///
/// # Example
/// ```
/// use poketeams_api::domain::team::Team;
/// use poketeams_api::domain::team::value_objects::{Roster, TeamName};
/// use uuid::Uuid;
///
/// let team = Team::new(
///     Uuid::new_v4(),
///     TeamName::new(" Ash Team ").expect("valid name"),
///     Roster::new(vec![1, 4, 7]).expect("valid roster"),
/// );
///
/// assert_eq!(team.name(), "Ash Team");
/// assert_eq!(team.pokemon_ids(), &[1, 4, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: TeamName,
    roster: Roster,
}

impl Team {
    /// Builds a team from already validated parts
    pub fn new(id: Uuid, name: TeamName, roster: Roster) -> Self {
        Self { id, name, roster }
    }

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the trimmed team name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the roster in its stored order
    pub fn pokemon_ids(&self) -> &[PokemonId] {
        self.roster.ids()
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips validation since rows were validated when written.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: Uuid, name: String, pokemon_ids: Vec<PokemonId>) -> Self {
        Self {
            id,
            name: TeamName::from_trusted(name),
            roster: Roster::from_trusted(pokemon_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_getters() {
        let id = Uuid::new_v4();
        let team = Team::new(
            id,
            TeamName::new("Kanto Starters").unwrap(),
            Roster::new(vec![1, 4, 7]).unwrap(),
        );

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "Kanto Starters");
        assert_eq!(team.pokemon_ids(), &[1, 4, 7]);
    }

    #[test]
    fn from_persistence_keeps_stored_values() {
        let id = Uuid::new_v4();
        let team = Team::from_persistence(id, "Stored".to_string(), vec![150, 151]);

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "Stored");
        assert_eq!(team.pokemon_ids(), &[150, 151]);
    }
}
