use crate::domain::team::TrainerId;
use uuid::Uuid;

/// Trainer team aggregate
///
/// A trainer's selection record: the teams associated with the trainer and
/// the one marked as active.
///
/// # Invariants
/// - Always references a trainer id
/// - `team_ids` keeps the caller's order
///
/// The selected team is expected to be one of `team_ids` but this is not
/// enforced; see [`TrainerTeam::selection_is_member`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerTeam {
    id: Uuid,
    trainer_id: TrainerId,
    team_ids: Vec<Uuid>,
    selected_team_id: Uuid,
}

impl TrainerTeam {
    pub fn new(
        id: Uuid,
        trainer_id: TrainerId,
        team_ids: Vec<Uuid>,
        selected_team_id: Uuid,
    ) -> Self {
        Self {
            id,
            trainer_id,
            team_ids,
            selected_team_id,
        }
    }

    /// Returns the record's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the owning trainer's ID
    pub fn trainer_id(&self) -> TrainerId {
        self.trainer_id
    }

    /// Returns the associated team ids in stored order
    pub fn team_ids(&self) -> &[Uuid] {
        &self.team_ids
    }

    /// Returns the active team
    pub fn selected_team_id(&self) -> Uuid {
        self.selected_team_id
    }

    /// Whether the selected team is one of the associated teams
    ///
    /// # Example
    /// ```
    /// use poketeams_api::domain::trainer_team::TrainerTeam;
    /// use uuid::Uuid;
    ///
    /// let team = Uuid::new_v4();
    /// let record = TrainerTeam::new(Uuid::new_v4(), 5, vec![team], team);
    /// assert!(record.selection_is_member());
    /// ```
    pub fn selection_is_member(&self) -> bool {
        self.team_ids.contains(&self.selected_team_id)
    }
}
