use std::time::Duration;

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

const DEFAULT_PORT: i64 = 8000;
const DEFAULT_POKEMON_SERVICE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_TRAINERS_SERVICE_URL: &str = "http://localhost:8001/api";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    #[serde(alias = "text")]
    Pretty,
    Json,
}

/// Flat view of the environment, one field per variable
#[derive(Debug, Deserialize)]
struct EnvSettings {
    port: u16,
    database_url: Option<String>,
    database_max_connections: u32,
    pokemon_service_url: String,
    trainers_service_url: String,
    pokemon_directory_url: Option<String>,
    trainers_directory_url: Option<String>,
    oracle_timeout_secs: u64,
    directory_ttl_secs: u64,
    validate_trainer_on_create: bool,
    log_level: String,
    log_format: LogFormat,
}

/// Process configuration read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// `None` runs against in-memory stores
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub pokemon_service_url: String,
    pub trainers_service_url: String,
    pub pokemon_directory_url: String,
    pub trainers_directory_url: String,
    pub oracle_timeout: Duration,
    pub directory_ttl: Duration,
    pub validate_trainer_on_create: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Reads the configuration from `vars` instead of the process
    /// environment when given
    pub fn load(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let settings: EnvSettings = Config::builder()
            .set_default("port", DEFAULT_PORT)?
            .set_default("database_max_connections", 5_i64)?
            .set_default("pokemon_service_url", DEFAULT_POKEMON_SERVICE_URL)?
            .set_default("trainers_service_url", DEFAULT_TRAINERS_SERVICE_URL)?
            .set_default("oracle_timeout_secs", 5_i64)?
            .set_default("directory_ttl_secs", 300_i64)?
            .set_default("validate_trainer_on_create", false)?
            .set_default("log_level", "info")?
            .set_default("log_format", "pretty")?
            .add_source(
                Environment::default()
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings.into())
    }
}

impl From<EnvSettings> for AppConfig {
    fn from(settings: EnvSettings) -> Self {
        let pokemon_directory_url = settings.pokemon_directory_url.unwrap_or_else(|| {
            format!("{}/pokemon", settings.pokemon_service_url.trim_end_matches('/'))
        });
        let trainers_directory_url = settings.trainers_directory_url.unwrap_or_else(|| {
            format!("{}/trainers", settings.trainers_service_url.trim_end_matches('/'))
        });

        Self {
            port: settings.port,
            database_url: settings.database_url,
            database_max_connections: settings.database_max_connections,
            pokemon_service_url: settings.pokemon_service_url,
            trainers_service_url: settings.trainers_service_url,
            pokemon_directory_url,
            trainers_directory_url,
            oracle_timeout: Duration::from_secs(settings.oracle_timeout_secs),
            directory_ttl: Duration::from_secs(settings.directory_ttl_secs),
            validate_trainer_on_create: settings.validate_trainer_on_create,
            log_level: settings.log_level,
            log_format: settings.log_format,
        }
    }
}
