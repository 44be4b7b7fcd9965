// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod oracle;
pub mod repositories;
pub mod team;
pub mod trainer_team;
pub mod upstream;
