// API layer module (adapters for controllers)

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

use handlers::{directory, health, teams, trainer_teams};
pub use state::AppState;

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        // Trainer team routes
        .route("/api/trainer-teams", post(trainer_teams::create_trainer_team))
        .route(
            "/api/trainer-teams/:id",
            get(trainer_teams::get_trainer_team)
                .put(trainer_teams::update_trainer_team)
                .delete(trainer_teams::delete_trainer_team),
        )
        .route(
            "/api/trainer-teams/trainer/:trainer_id",
            get(trainer_teams::get_trainer_teams_by_trainer),
        )
        // Upstream directory
        .route("/api/trainers", get(directory::list_trainers))
        .route("/api/trainers/:id", get(directory::get_trainer))
        .route("/api/pokemon", get(directory::list_pokemon))
        .route("/api/pokemon/:id", get(directory::get_pokemon))
        .route("/api/directory/refresh", post(directory::refresh_directory))
        .with_state(state)
}
