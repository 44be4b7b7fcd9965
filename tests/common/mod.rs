//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use poketeams_api::api::{self, AppState};
use poketeams_api::domain::oracle::{Existence, ExistenceOracle};
use poketeams_api::domain::upstream::{
    DirectorySource, PokemonRecord, TrainerRecord, UpstreamError,
};
use poketeams_api::infrastructure::repositories::{
    InMemoryTeamRepository, InMemoryTrainerTeamRepository,
};
use poketeams_api::services::{CachedDirectory, TeamService, TrainerTeamService};
use serde_json::json;

/// Oracle answering from a fixed id set
pub struct KnownIds(pub HashSet<i64>);

impl KnownIds {
    pub fn of(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }
}

#[async_trait]
impl ExistenceOracle for KnownIds {
    async fn check(&self, id: i64) -> Existence {
        if self.0.contains(&id) {
            Existence::Present
        } else {
            Existence::Absent
        }
    }
}

/// Directory source serving fixed lists
pub struct StaticDirectory;

#[async_trait]
impl DirectorySource for StaticDirectory {
    async fn fetch_trainers(&self) -> Result<Vec<TrainerRecord>, UpstreamError> {
        Ok(vec![
            TrainerRecord {
                id: 5,
                name: "Ash".to_string(),
                extra: Default::default(),
            },
            TrainerRecord {
                id: 6,
                name: "Misty".to_string(),
                extra: json!({ "region": "Kanto", "gimnasio": "Celeste" })
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            },
        ])
    }

    async fn fetch_pokemon(&self) -> Result<Vec<PokemonRecord>, UpstreamError> {
        Ok(vec![PokemonRecord {
            id: 25,
            name: "Pikachu".to_string(),
            types: vec!["electric".to_string()],
            level: Some(5),
            stats: None,
            moves: vec![],
            sprite: None,
            extra: Default::default(),
        }])
    }
}

/// Router wired to in-memory stores; Pokémon 1..=151 and trainers 5, 6 exist
pub fn setup_app() -> Router {
    let teams = Arc::new(InMemoryTeamRepository::new());
    let state = AppState {
        teams: Arc::new(TeamService::new(teams.clone(), Arc::new(KnownIds::of(1..=151)))),
        trainer_teams: Arc::new(TrainerTeamService::new(
            Arc::new(InMemoryTrainerTeamRepository::new()),
            teams,
            Arc::new(KnownIds::of([5, 6])),
        )),
        directory: Arc::new(CachedDirectory::new(
            Arc::new(StaticDirectory),
            Duration::from_secs(60),
        )),
    };
    api::router(state)
}
