// Repository ports
// Implemented by the infrastructure layer

pub mod team_repository;
pub mod trainer_team_repository;

pub use team_repository::TeamRepository;
pub use trainer_team_repository::TrainerTeamRepository;

use thiserror::Error;

/// Failure inside a persistence adapter
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored id list could not be decoded: {0}")]
    Codec(#[from] serde_json::Error),
}
