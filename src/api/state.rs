use std::sync::Arc;

use crate::services::{CachedDirectory, TeamService, TrainerTeamService};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<TeamService>,
    pub trainer_teams: Arc<TrainerTeamService>,
    pub directory: Arc<CachedDirectory>,
}
