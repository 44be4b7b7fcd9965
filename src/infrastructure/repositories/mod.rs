// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod id_list;
pub mod in_memory_team_repository;
pub mod in_memory_trainer_team_repository;
pub mod postgres_team_repository;
pub mod postgres_trainer_team_repository;

pub use in_memory_team_repository::InMemoryTeamRepository;
pub use in_memory_trainer_team_repository::InMemoryTrainerTeamRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_trainer_team_repository::PostgresTrainerTeamRepository;
