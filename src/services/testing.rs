// Test doubles shared by the service tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::oracle::{Existence, ExistenceOracle};
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{PokemonId, Team};
use crate::infrastructure::repositories::InMemoryTeamRepository;

/// Oracle that knows a fixed set of ids and records every check
#[derive(Default)]
pub struct ScriptedOracle {
    known: HashSet<i64>,
    unreachable: bool,
    calls: AtomicUsize,
    checked: Mutex<Vec<i64>>,
}

impl ScriptedOracle {
    pub fn knowing(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            known: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn checked(&self) -> Vec<i64> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExistenceOracle for ScriptedOracle {
    async fn check(&self, id: i64) -> Existence {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.checked.lock().unwrap().push(id);
        if self.unreachable {
            Existence::Unreachable
        } else if self.known.contains(&id) {
            Existence::Present
        } else {
            Existence::Absent
        }
    }
}

/// Team repository whose writes fail, or whose delete fails for one id
pub struct FailingTeamRepository {
    pub inner: InMemoryTeamRepository,
    pub fail_writes: bool,
    pub fail_delete_of: Option<Uuid>,
}

impl FailingTeamRepository {
    fn failure() -> RepositoryError {
        RepositoryError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl TeamRepository for FailingTeamRepository {
    async fn insert(&self, name: &str, pokemon_ids: &[PokemonId]) -> Result<Uuid, RepositoryError> {
        if self.fail_writes {
            return Err(Self::failure());
        }
        self.inner.insert(name, pokemon_ids).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        self.inner.exists(id).await
    }

    async fn update(&self, team: &Team) -> Result<bool, RepositoryError> {
        if self.fail_writes {
            return Err(Self::failure());
        }
        self.inner.update(team).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        if self.fail_writes || self.fail_delete_of == Some(id) {
            return Err(Self::failure());
        }
        self.inner.delete(id).await
    }
}
