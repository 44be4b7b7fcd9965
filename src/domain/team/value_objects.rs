use std::fmt;

/// Identifier of a Pokémon in the external system of record
pub type PokemonId = i64;

/// Identifier of a trainer in the external system of record
pub type TrainerId = i64;

/// Maximum number of Pokémon a team may carry
pub const MAX_ROSTER_SIZE: usize = 6;

/// Parses a caller-supplied trainer id
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// integer is rejected.
///
/// # Example
/// ```
/// use poketeams_api::domain::team::value_objects::parse_trainer_id;
///
/// assert_eq!(parse_trainer_id(" 5 "), Ok(5));
/// assert!(parse_trainer_id("ash").is_err());
/// ```
pub fn parse_trainer_id(raw: &str) -> Result<TrainerId, String> {
    raw.trim()
        .parse::<TrainerId>()
        .map_err(|_| format!("Invalid trainer id: {}", raw))
}

/// Team name value object
///
/// # Invariants
/// - Stored trimmed
/// - Never empty after trimming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName, trimming surrounding whitespace
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the trimmed name is not empty
    /// * `Err(String)` - If nothing but whitespace was supplied
    pub fn new(name: &str) -> Result<Self, String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        Ok(TeamName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_trusted(name: String) -> Self {
        TeamName(name)
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered roster of Pokémon ids
///
/// # Invariants
/// - At most [`MAX_ROSTER_SIZE`] entries
/// - Order is preserved exactly as supplied
/// - Duplicates are allowed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster(Vec<PokemonId>);

impl Roster {
    /// Creates a roster, rejecting more than six Pokémon
    ///
    /// # Example
    /// ```
    /// use poketeams_api::domain::team::value_objects::Roster;
    ///
    /// assert!(Roster::new(vec![1, 4, 7]).is_ok());
    /// assert!(Roster::new(vec![1, 2, 3, 4, 5, 6, 7]).is_err());
    /// ```
    pub fn new(pokemon_ids: Vec<PokemonId>) -> Result<Self, String> {
        if pokemon_ids.len() > MAX_ROSTER_SIZE {
            return Err(format!(
                "A team cannot have more than {} Pokémon (got {})",
                MAX_ROSTER_SIZE,
                pokemon_ids.len()
            ));
        }
        Ok(Roster(pokemon_ids))
    }

    pub fn ids(&self) -> &[PokemonId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<PokemonId> {
        self.0
    }

    pub(crate) fn from_trusted(pokemon_ids: Vec<PokemonId>) -> Self {
        Roster(pokemon_ids)
    }
}
