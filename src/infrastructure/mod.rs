// Infrastructure layer module
// Contains database adapters and external service integrations

pub mod directory;
pub mod logging;
pub mod oracle;
pub mod repositories;
