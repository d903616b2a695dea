//! Repository trait definitions.
//!
//! The traits are the abstract storage interface; implementations live
//! in `db::repositories`. All methods are async and return
//! [`RepositoryResult`].

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::BlockId;
use crate::models::{TimeBlock, UserProfile};

/// Write-time policy for blocks whose time ranges overlap on a day.
///
/// `Reject` refuses the insert with a conflict error; `Allow` stores
/// the block and leaves rendering to the layout's first-wins
/// covered-slot suppression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    #[default]
    Reject,
    Allow,
}

impl std::str::FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "allow" => Ok(Self::Allow),
            _ => Err(format!("Unknown overlap policy: {}", s)),
        }
    }
}

/// User profile storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create or replace the profile keyed by its uid. Idempotent:
    /// repeating the call with an identical payload is a no-op.
    async fn upsert_user(&self, profile: &UserProfile) -> RepositoryResult<UserProfile>;

    /// Fetch a profile; `Ok(None)` when the uid is unknown.
    async fn fetch_user(&self, uid: &str) -> RepositoryResult<Option<UserProfile>>;

    /// Update an existing profile; errors with `NotFound` when the uid
    /// is unknown.
    async fn update_user(&self, uid: &str, profile: &UserProfile) -> RepositoryResult<UserProfile>;
}

/// Time block storage and booking.
#[async_trait]
pub trait BlockRepository: Send + Sync {
    /// Store a block, honoring the write-time overlap policy.
    async fn insert_block(&self, block: &TimeBlock) -> RepositoryResult<TimeBlock>;

    /// Fetch a single block; `Ok(None)` when unknown.
    async fn fetch_block(&self, id: BlockId) -> RepositoryResult<Option<TimeBlock>>;

    /// All blocks with `start <= date <= end`, ordered by date then
    /// start time. An empty result is not an error.
    async fn fetch_blocks_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<TimeBlock>>;

    /// Atomically book a block for `occupant`.
    ///
    /// Two concurrent submissions for the same block yield exactly one
    /// success; the loser gets a `Conflict` error and the stored block
    /// is unchanged.
    async fn book_block(&self, id: BlockId, occupant: &str) -> RepositoryResult<TimeBlock>;

    /// Backend liveness probe.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Combined repository interface used by application state.
pub trait FullRepository: UserRepository + BlockRepository {}

impl<T: UserRepository + BlockRepository> FullRepository for T {}
