use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{info, warn};

use super::errors::{ServiceError, ServiceResult};
use crate::domain::team::{PokemonId, TrainerId};
use crate::domain::upstream::{DirectorySource, PokemonRecord, TrainerRecord, UpstreamError};

/// Cache key; each cache holds a single full list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ListKey;

/// Trainer and Pokémon directories cached with a TTL
///
/// Lists are fetched lazily on first use, refetched once the TTL elapses,
/// and can be dropped early with [`CachedDirectory::invalidate`].
/// Concurrent misses share a single upstream fetch.
pub struct CachedDirectory {
    source: Arc<dyn DirectorySource>,
    trainers: Cache<ListKey, Arc<Vec<TrainerRecord>>>,
    pokemon: Cache<ListKey, Arc<Vec<PokemonRecord>>>,
}

impl CachedDirectory {
    pub fn new(source: Arc<dyn DirectorySource>, ttl: Duration) -> Self {
        Self {
            source,
            trainers: Cache::builder().time_to_live(ttl).max_capacity(1).build(),
            pokemon: Cache::builder().time_to_live(ttl).max_capacity(1).build(),
        }
    }

    pub async fn list_trainers(&self) -> ServiceResult<Arc<Vec<TrainerRecord>>> {
        let source = self.source.clone();
        self.trainers
            .try_get_with(ListKey, async move { source.fetch_trainers().await.map(Arc::new) })
            .await
            .map_err(upstream_failure)
    }

    pub async fn trainer_by_id(&self, id: TrainerId) -> ServiceResult<TrainerRecord> {
        self.list_trainers()
            .await?
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Trainer with ID {} not found", id)))
    }

    pub async fn list_pokemon(&self) -> ServiceResult<Arc<Vec<PokemonRecord>>> {
        let source = self.source.clone();
        self.pokemon
            .try_get_with(ListKey, async move { source.fetch_pokemon().await.map(Arc::new) })
            .await
            .map_err(upstream_failure)
    }

    pub async fn pokemon_by_id(&self, id: PokemonId) -> ServiceResult<PokemonRecord> {
        self.list_pokemon()
            .await?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Pokémon with ID {} not found", id)))
    }

    /// Drops both cached lists; the next read refetches
    pub async fn invalidate(&self) {
        self.trainers.invalidate(&ListKey).await;
        self.pokemon.invalidate(&ListKey).await;
        info!("Directory cache invalidated");
    }
}

fn upstream_failure(err: Arc<UpstreamError>) -> ServiceError {
    warn!(error = %err, "Directory fetch failed");
    match err.as_ref() {
        UpstreamError::Format(_) => {
            ServiceError::Upstream("Upstream directory returned a malformed payload".to_string())
        }
        UpstreamError::Transport(_) => {
            ServiceError::Upstream("Upstream directory is unavailable".to_string())
        }
    }
}
