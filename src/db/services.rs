//! High-level storage functions that work with any repository
//! implementation. Use these in application code instead of calling
//! the repository traits directly.

use chrono::NaiveDate;
use log::{debug, info};

use crate::api::BlockId;
use crate::models::{TimeBlock, UserProfile};
use crate::scheduling::week_window;

use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};

/// Check that the storage backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Create or replace a user profile. Idempotent on repeat submission
/// with an identical payload.
pub async fn upsert_user_profile(
    repo: &dyn FullRepository,
    profile: &UserProfile,
) -> RepositoryResult<UserProfile> {
    info!("upserting profile for uid={}", profile.uid);
    repo.upsert_user(profile).await
}

/// Fetch a profile by uid; `Ok(None)` when unknown.
pub async fn get_user_profile(
    repo: &dyn FullRepository,
    uid: &str,
) -> RepositoryResult<Option<UserProfile>> {
    repo.fetch_user(uid).await
}

/// Update an existing profile; `NotFound` when the uid is unknown.
pub async fn update_user_profile(
    repo: &dyn FullRepository,
    uid: &str,
    profile: &UserProfile,
) -> RepositoryResult<UserProfile> {
    info!("updating profile for uid={}", uid);
    repo.update_user(uid, profile).await
}

/// Store a time block.
pub async fn store_block(
    repo: &dyn FullRepository,
    block: &TimeBlock,
) -> RepositoryResult<TimeBlock> {
    repo.insert_block(block).await
}

/// Fetch a single block, erroring with `NotFound` when unknown.
pub async fn get_block(repo: &dyn FullRepository, id: BlockId) -> RepositoryResult<TimeBlock> {
    repo.fetch_block(id).await?.ok_or_else(|| {
        RepositoryError::not_found(format!("block {} not found", id)).with_context(
            ErrorContext::new("get_block")
                .with_entity("block")
                .with_entity_id(id),
        )
    })
}

/// All blocks in the inclusive date range.
pub async fn list_blocks_in_range(
    repo: &dyn FullRepository,
    start: NaiveDate,
    end: NaiveDate,
) -> RepositoryResult<Vec<TimeBlock>> {
    let blocks = repo.fetch_blocks_in_range(start, end).await?;
    debug!("{} blocks in range {}..={}", blocks.len(), start, end);
    Ok(blocks)
}

/// All blocks in the Monday-Sunday week containing `reference`.
pub async fn list_week_blocks(
    repo: &dyn FullRepository,
    reference: NaiveDate,
) -> RepositoryResult<Vec<TimeBlock>> {
    let week = week_window(reference);
    repo.fetch_blocks_in_range(week[0], week[6]).await
}

/// Atomically book a block. The occupant name must be non-empty.
pub async fn book_block(
    repo: &dyn FullRepository,
    id: BlockId,
    occupant: &str,
) -> RepositoryResult<TimeBlock> {
    if occupant.trim().is_empty() {
        return Err(
            RepositoryError::validation("occupant name must not be empty").with_context(
                ErrorContext::new("book_block")
                    .with_entity("block")
                    .with_entity_id(id),
            ),
        );
    }
    let booked = repo.book_block(id, occupant.trim()).await?;
    info!("block {} booked by {}", id, occupant.trim());
    Ok(booked)
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;
