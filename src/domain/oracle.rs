use async_trait::async_trait;

/// Outcome of a single existence check against an external system of record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    /// The upstream confirmed the entity exists
    Present,
    /// The upstream answered, but not with a success
    Absent,
    /// The upstream could not be reached
    Unreachable,
}

impl Existence {
    pub fn is_present(self) -> bool {
        matches!(self, Existence::Present)
    }
}

/// Boundary that answers whether a Pokémon or trainer id exists upstream
///
/// Implementations never fail: anything other than a confirmed hit is
/// reported as [`Existence::Absent`] or [`Existence::Unreachable`], and
/// [`ExistenceOracle::exists`] collapses both to `false`.
#[async_trait]
pub trait ExistenceOracle: Send + Sync {
    /// Classify the id, keeping "absent" and "unreachable" apart
    async fn check(&self, id: i64) -> Existence;

    /// Fail-closed existence answer
    async fn exists(&self, id: i64) -> bool {
        self.check(id).await.is_present()
    }
}
