pub mod directory;
pub mod health;
pub mod teams;
pub mod trainer_teams;
