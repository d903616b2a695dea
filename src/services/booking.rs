//! Booking submission flow.
//!
//! The coordinator owns the per-attempt state machine:
//!
//! ```text
//! idle -> submitting -> { success -> idle (slot booked)
//!                       , failure -> idle (slot unchanged, error surfaced) }
//! ```
//!
//! Only one submission may be in flight at a time; further attempts are
//! rejected until the outstanding request resolves. The coordinator
//! never mutates slot state itself — the repository is the single
//! writer, so a failed submission leaves the slot exactly as it was.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::BlockId;
use crate::db::repository::{FullRepository, RepositoryError};
use crate::models::TimeBlock;

/// Submission state, observable by the UI to disable further clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Idle,
    Submitting,
}

/// Error surfaced to the user for a failed booking attempt.
///
/// Every variant maps to a user-visible message; none are silently
/// swallowed. `Conflict` means the slot was taken by the time the
/// submission landed and the grid should re-render it as unavailable.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("a booking request is already in flight")]
    AlreadySubmitting,
    #[error("invalid booking request: {0}")]
    Validation(String),
    #[error("class not found: {0}")]
    NotFound(String),
    #[error("slot no longer available: {0}")]
    Conflict(String),
    #[error("booking request failed: {0}")]
    Transport(String),
}

impl BookingError {
    /// Transport failures are safe to retry; the slot state is unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BookingError::Transport(_) | BookingError::AlreadySubmitting)
    }
}

impl From<RepositoryError> for BookingError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { message, .. } => BookingError::NotFound(message),
            RepositoryError::Conflict { message, .. } => BookingError::Conflict(message),
            RepositoryError::Validation { message, .. } => BookingError::Validation(message),
            other => BookingError::Transport(other.to_string()),
        }
    }
}

/// Serializes booking submissions against the repository.
pub struct BookingCoordinator {
    repository: Arc<dyn FullRepository>,
    state: Mutex<BookingState>,
}

impl BookingCoordinator {
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            state: Mutex::new(BookingState::Idle),
        }
    }

    /// Current submission state.
    pub fn state(&self) -> BookingState {
        *self.state.lock()
    }

    /// Attempt to book `block_id` for `occupant`.
    ///
    /// Returns the updated block on success. On any failure the slot is
    /// left in its prior state; the caller re-renders from the
    /// repository's authoritative response.
    pub async fn book(&self, block_id: BlockId, occupant: &str) -> Result<TimeBlock, BookingError> {
        let occupant = occupant.trim();
        if occupant.is_empty() {
            return Err(BookingError::Validation(
                "occupant name must not be empty".to_string(),
            ));
        }

        {
            let mut state = self.state.lock();
            if *state == BookingState::Submitting {
                return Err(BookingError::AlreadySubmitting);
            }
            *state = BookingState::Submitting;
        }

        let result = self.repository.book_block(block_id, occupant).await;

        *self.state.lock() = BookingState::Idle;
        result.map_err(BookingError::from)
    }
}
