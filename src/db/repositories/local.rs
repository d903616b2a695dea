//! In-memory repository for unit testing and local development.
//!
//! All state sits behind `parking_lot` locks. Booking takes the block
//! write lock for the whole check-and-set, which is what makes
//! `book_block` atomic: of two concurrent submissions for the same
//! slot, exactly one observes it unbooked.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use parking_lot::RwLock;

use crate::api::BlockId;
use crate::db::repository::{
    BlockRepository, ErrorContext, OverlapPolicy, RepositoryError, RepositoryResult,
    UserRepository,
};
use crate::models::{ClockTime, TimeBlock, UserProfile};

/// In-memory repository.
pub struct LocalRepository {
    users: RwLock<HashMap<String, UserProfile>>,
    blocks: RwLock<BTreeMap<i64, TimeBlock>>,
    overlap_policy: OverlapPolicy,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::with_policy(OverlapPolicy::default())
    }

    pub fn with_policy(overlap_policy: OverlapPolicy) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            blocks: RwLock::new(BTreeMap::new()),
            overlap_policy,
        }
    }

    /// Repository pre-seeded with the studio's sample January 2025
    /// schedule, for local development and tests.
    pub fn with_sample_schedule() -> Self {
        let repo = Self::new();
        {
            // Seeded directly, bypassing the overlap policy: the sample
            // set contains one overlapping pair to exercise the layout's
            // covered-slot suppression.
            let mut blocks = repo.blocks.write();
            for block in sample_schedule() {
                blocks.insert(block.id.value(), block);
            }
        }
        repo
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap_policy
    }

    fn check_overlap(
        blocks: &BTreeMap<i64, TimeBlock>,
        candidate: &TimeBlock,
    ) -> Option<BlockId> {
        blocks
            .values()
            .find(|existing| {
                existing.id != candidate.id
                    && existing.date == candidate.date
                    && existing.start_time < candidate.end_time
                    && candidate.start_time < existing.end_time
            })
            .map(|existing| existing.id)
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn upsert_user(&self, profile: &UserProfile) -> RepositoryResult<UserProfile> {
        if profile.uid.is_empty() {
            return Err(RepositoryError::validation("uid is required")
                .with_context(ErrorContext::new("upsert_user").with_entity("user")));
        }
        let mut users = self.users.write();
        users.insert(profile.uid.clone(), profile.clone());
        debug!("upserted user profile uid={}", profile.uid);
        Ok(profile.clone())
    }

    async fn fetch_user(&self, uid: &str) -> RepositoryResult<Option<UserProfile>> {
        Ok(self.users.read().get(uid).cloned())
    }

    async fn update_user(&self, uid: &str, profile: &UserProfile) -> RepositoryResult<UserProfile> {
        let mut users = self.users.write();
        if !users.contains_key(uid) {
            return Err(RepositoryError::not_found(format!("user {} not found", uid))
                .with_context(
                    ErrorContext::new("update_user")
                        .with_entity("user")
                        .with_entity_id(uid),
                ));
        }
        let mut updated = profile.clone();
        updated.uid = uid.to_string();
        users.insert(uid.to_string(), updated.clone());
        debug!("updated user profile uid={}", uid);
        Ok(updated)
    }
}

#[async_trait]
impl BlockRepository for LocalRepository {
    async fn insert_block(&self, block: &TimeBlock) -> RepositoryResult<TimeBlock> {
        block.validate().map_err(|e| {
            RepositoryError::validation(e.to_string()).with_context(
                ErrorContext::new("insert_block")
                    .with_entity("block")
                    .with_entity_id(block.id),
            )
        })?;

        let mut blocks = self.blocks.write();
        if self.overlap_policy == OverlapPolicy::Reject {
            if let Some(other) = Self::check_overlap(&blocks, block) {
                return Err(RepositoryError::conflict(format!(
                    "block overlaps existing block {} on {}",
                    other, block.date
                ))
                .with_context(
                    ErrorContext::new("insert_block")
                        .with_entity("block")
                        .with_entity_id(block.id),
                ));
            }
        }
        blocks.insert(block.id.value(), block.clone());
        Ok(block.clone())
    }

    async fn fetch_block(&self, id: BlockId) -> RepositoryResult<Option<TimeBlock>> {
        Ok(self.blocks.read().get(&id.value()).cloned())
    }

    async fn fetch_blocks_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<TimeBlock>> {
        if start > end {
            return Err(
                RepositoryError::validation(format!("range start {} is after end {}", start, end))
                    .with_context(ErrorContext::new("fetch_blocks_in_range").with_entity("block")),
            );
        }
        let mut result: Vec<TimeBlock> = self
            .blocks
            .read()
            .values()
            .filter(|b| b.date >= start && b.date <= end)
            .cloned()
            .collect();
        result.sort_by_key(|b| (b.date, b.start_time.minutes()));
        Ok(result)
    }

    async fn book_block(&self, id: BlockId, occupant: &str) -> RepositoryResult<TimeBlock> {
        // Single write lock around check-and-set: at most one booking
        // per slot can ever succeed.
        let mut blocks = self.blocks.write();
        let block = blocks.get_mut(&id.value()).ok_or_else(|| {
            RepositoryError::not_found(format!("block {} not found", id)).with_context(
                ErrorContext::new("book_block")
                    .with_entity("block")
                    .with_entity_id(id),
            )
        })?;

        if let Some(existing) = &block.occupant {
            return Err(RepositoryError::conflict(format!(
                "block {} already booked by {}",
                id, existing
            ))
            .with_context(
                ErrorContext::new("book_block")
                    .with_entity("block")
                    .with_entity_id(id),
            ));
        }

        block.occupant = Some(occupant.to_string());
        debug!("booked block id={} occupant={}", id, occupant);
        Ok(block.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

/// The studio's hard-coded sample schedule (January 2025).
pub fn sample_schedule() -> Vec<TimeBlock> {
    fn block(
        id: i64,
        date: (i32, u32, u32),
        start: (u16, u16),
        end: (u16, u16),
        label: &str,
        owner: &str,
        occupant: Option<&str>,
    ) -> Option<TimeBlock> {
        Some(TimeBlock {
            id: BlockId::new(id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)?,
            start_time: ClockTime::from_hm(start.0, start.1).ok()?,
            end_time: ClockTime::from_hm(end.0, end.1).ok()?,
            label: label.to_string(),
            owner_name: owner.to_string(),
            occupant: occupant.map(str::to_string),
        })
    }

    [
        block(1, (2025, 1, 15), (9, 0), (10, 30), "Yoga", "Sarah Chen", None),
        block(
            2,
            (2025, 1, 15),
            (10, 0),
            (11, 0),
            "Calisthenics",
            "Michael Rodriguez",
            Some("John Smith"),
        ),
        block(
            3,
            (2025, 1, 15),
            (14, 0),
            (15, 0),
            "Prenatal Yoga",
            "Emma Thompson",
            None,
        ),
        block(
            4,
            (2025, 1, 16),
            (18, 0),
            (19, 30),
            "Kickboxing",
            "David Kim",
            None,
        ),
        block(
            5,
            (2025, 1, 17),
            (7, 0),
            (8, 0),
            "Power Yoga",
            "Sarah Chen",
            None,
        ),
        block(
            6,
            (2025, 1, 17),
            (19, 0),
            (20, 0),
            "Meditation",
            "Michael Rodriguez",
            None,
        ),
        block(
            7,
            (2025, 1, 18),
            (11, 0),
            (12, 30),
            "Hot Yoga",
            "Emma Thompson",
            None,
        ),
        block(
            8,
            (2025, 1, 19),
            (16, 0),
            (17, 0),
            "Pilates",
            "David Kim",
            None,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_block(id: i64, day: u32, start: (u16, u16), end: (u16, u16)) -> TimeBlock {
        TimeBlock {
            id: BlockId::new(id),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            start_time: ClockTime::from_hm(start.0, start.1).unwrap(),
            end_time: ClockTime::from_hm(end.0, end.1).unwrap(),
            label: "Yoga".to_string(),
            owner_name: "Sarah Chen".to_string(),
            occupant: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_block() {
        let repo = LocalRepository::new();
        let block = open_block(1, 10, (9, 0), (10, 0));
        repo.insert_block(&block).await.unwrap();
        let fetched = repo.fetch_block(BlockId::new(1)).await.unwrap().unwrap();
        assert_eq!(fetched, block);
    }

    #[tokio::test]
    async fn test_insert_rejects_inverted_range() {
        let repo = LocalRepository::new();
        let block = open_block(1, 10, (10, 0), (9, 0));
        let err = repo.insert_block(&block).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_overlap_rejected_by_default() {
        let repo = LocalRepository::new();
        repo.insert_block(&open_block(1, 10, (9, 0), (10, 30)))
            .await
            .unwrap();
        let err = repo
            .insert_block(&open_block(2, 10, (10, 0), (11, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { .. }));

        // Back-to-back is not an overlap.
        repo.insert_block(&open_block(3, 10, (10, 30), (11, 30)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_overlap_allowed_when_configured() {
        let repo = LocalRepository::with_policy(OverlapPolicy::Allow);
        repo.insert_block(&open_block(1, 10, (9, 0), (10, 30)))
            .await
            .unwrap();
        repo.insert_block(&open_block(2, 10, (10, 0), (11, 0)))
            .await
            .unwrap();
        let blocks = repo
            .fetch_blocks_in_range(
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[tokio::test]
    async fn test_same_time_different_days_never_conflict() {
        let repo = LocalRepository::new();
        repo.insert_block(&open_block(1, 10, (9, 0), (10, 0)))
            .await
            .unwrap();
        repo.insert_block(&open_block(2, 11, (9, 0), (10, 0)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_range_query_sorted_and_inclusive() {
        let repo = LocalRepository::new();
        repo.insert_block(&open_block(2, 12, (9, 0), (10, 0)))
            .await
            .unwrap();
        repo.insert_block(&open_block(1, 10, (15, 0), (16, 0)))
            .await
            .unwrap();
        repo.insert_block(&open_block(3, 10, (8, 0), (9, 0)))
            .await
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let blocks = repo.fetch_blocks_in_range(start, end).await.unwrap();
        let ids: Vec<i64> = blocks.iter().map(|b| b.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_range_query_rejects_inverted_range() {
        let repo = LocalRepository::new();
        let start = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(repo.fetch_blocks_in_range(start, end).await.is_err());
    }

    #[tokio::test]
    async fn test_booking_is_first_come_first_served() {
        let repo = LocalRepository::new();
        repo.insert_block(&open_block(1, 10, (9, 0), (10, 0)))
            .await
            .unwrap();

        let booked = repo.book_block(BlockId::new(1), "Jane").await.unwrap();
        assert_eq!(booked.occupant.as_deref(), Some("Jane"));

        let err = repo.book_block(BlockId::new(1), "John").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { .. }));

        let stored = repo.fetch_block(BlockId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.occupant.as_deref(), Some("Jane"));
    }

    #[tokio::test]
    async fn test_concurrent_bookings_yield_one_success() {
        use std::sync::Arc;

        let repo = Arc::new(LocalRepository::new());
        repo.insert_block(&open_block(1, 10, (9, 0), (10, 0)))
            .await
            .unwrap();

        let a = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.book_block(BlockId::new(1), "Jane").await })
        };
        let b = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.book_block(BlockId::new(1), "John").await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_user_upsert_is_idempotent() {
        let repo = LocalRepository::new();
        let profile = UserProfile::new("uid-1");
        let first = repo.upsert_user(&profile).await.unwrap();
        let second = repo.upsert_user(&profile).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.fetch_user("uid-1").await.unwrap(), Some(profile));
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_not_found() {
        let repo = LocalRepository::new();
        let profile = UserProfile::new("ghost");
        let err = repo.update_user("ghost", &profile).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_sample_schedule_shape() {
        let repo = LocalRepository::with_sample_schedule();
        let start = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
        let blocks = repo.fetch_blocks_in_range(start, end).await.unwrap();
        assert_eq!(blocks.len(), 8);
        assert_eq!(blocks.iter().filter(|b| b.is_available()).count(), 7);
    }
}
