// Trainer team domain module
// Links a trainer to the teams they own and the one currently selected

#![allow(clippy::module_inception)]

pub mod trainer_team;

pub use trainer_team::TrainerTeam;
