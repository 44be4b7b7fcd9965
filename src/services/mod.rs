// Application services
// Enforce the team invariants on top of the domain ports

pub mod directory;
pub mod errors;
pub mod team_service;
pub mod trainer_team_service;

#[cfg(test)]
pub(crate) mod testing;

pub use directory::CachedDirectory;
pub use errors::{ServiceError, ServiceResult};
pub use team_service::TeamService;
pub use trainer_team_service::TrainerTeamService;
