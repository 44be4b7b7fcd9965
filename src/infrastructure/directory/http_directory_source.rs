use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::domain::upstream::{
    parse_pokemon_list, parse_trainer_list, DirectorySource, PokemonRecord, TrainerRecord,
    UpstreamError,
};

/// Fetches the trainer and Pokémon directories over HTTP
#[derive(Debug, Clone)]
pub struct HttpDirectorySource {
    client: Client,
    trainers_url: String,
    pokemon_url: String,
}

impl HttpDirectorySource {
    pub fn new(
        client: Client,
        trainers_url: impl Into<String>,
        pokemon_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            trainers_url: trainers_url.into(),
            pokemon_url: pokemon_url.into(),
        }
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(UpstreamError::Transport(format!(
                "{} answered {}",
                url,
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| UpstreamError::Transport(format!("invalid JSON from {}: {}", url, err)))
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch_trainers(&self) -> Result<Vec<TrainerRecord>, UpstreamError> {
        let payload = self.fetch_json(&self.trainers_url).await?;
        let trainers = parse_trainer_list(payload)?;
        info!(count = trainers.len(), "Trainers loaded from upstream");
        Ok(trainers)
    }

    async fn fetch_pokemon(&self) -> Result<Vec<PokemonRecord>, UpstreamError> {
        let payload = self.fetch_json(&self.pokemon_url).await?;
        let pokemon = parse_pokemon_list(payload)?;
        info!(count = pokemon.len(), "Pokémon loaded from upstream");
        Ok(pokemon)
    }
}
