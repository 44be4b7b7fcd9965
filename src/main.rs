use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use poketeams_api::api::{self, AppState};
use poketeams_api::config::AppConfig;
use poketeams_api::domain::repositories::{TeamRepository, TrainerTeamRepository};
use poketeams_api::infrastructure::directory::HttpDirectorySource;
use poketeams_api::infrastructure::logging::init_logging;
use poketeams_api::infrastructure::oracle::HttpExistenceOracle;
use poketeams_api::infrastructure::repositories::{
    InMemoryTeamRepository, InMemoryTrainerTeamRepository, PostgresTeamRepository,
    PostgresTrainerTeamRepository,
};
use poketeams_api::services::{CachedDirectory, TeamService, TrainerTeamService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_logging(&config.log_level, config.log_format);

    let (teams, trainer_teams): (Arc<dyn TeamRepository>, Arc<dyn TrainerTeamRepository>) =
        match &config.database_url {
            Some(database_url) => {
                tracing::info!("Connecting to database...");
                let pool = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect(database_url)
                    .await?;
                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Database connected successfully");

                let teams: Arc<dyn TeamRepository> =
                    Arc::new(PostgresTeamRepository::new(pool.clone()));
                let trainer_teams: Arc<dyn TrainerTeamRepository> =
                    Arc::new(PostgresTrainerTeamRepository::new(pool));
                (teams, trainer_teams)
            }
            None => {
                tracing::warn!("DATABASE_URL not set, using in-memory stores");
                let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::new());
                let trainer_teams: Arc<dyn TrainerTeamRepository> =
                    Arc::new(InMemoryTrainerTeamRepository::new());
                (teams, trainer_teams)
            }
        };

    let http = reqwest::Client::builder()
        .timeout(config.oracle_timeout)
        .build()?;

    let pokemon_oracle = Arc::new(HttpExistenceOracle::pokemon(
        http.clone(),
        &config.pokemon_service_url,
    ));
    let trainer_oracle = Arc::new(HttpExistenceOracle::trainers(
        http.clone(),
        &config.trainers_service_url,
    ));
    let directory_source = Arc::new(HttpDirectorySource::new(
        http,
        &config.trainers_directory_url,
        &config.pokemon_directory_url,
    ));

    let state = AppState {
        teams: Arc::new(TeamService::new(teams.clone(), pokemon_oracle)),
        trainer_teams: Arc::new(
            TrainerTeamService::new(trainer_teams, teams, trainer_oracle)
                .with_trainer_validation(config.validate_trainer_on_create),
        ),
        directory: Arc::new(CachedDirectory::new(directory_source, config.directory_ttl)),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
