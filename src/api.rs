//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes and re-exports the
//! DTO types used by the HTTP API. All types derive Serialize/Deserialize
//! for JSON serialization.

pub use crate::models::{ClockTime, Preferences, TimeBlock, UserProfile};
pub use crate::scheduling::calendar::{CalendarCell, MonthCursor, MonthGrid};
pub use crate::scheduling::week::{DayHeader, WeekCell, WeekGrid, WeekRow};
pub use crate::scheduling::GridConfig;

use serde::{Deserialize, Serialize};

/// Time block identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlockId(pub i64);

impl BlockId {
    pub fn new(value: i64) -> Self {
        BlockId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BlockId> for i64 {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::BlockId;

    #[test]
    fn test_block_id_value() {
        let id = BlockId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_block_id_serde_is_transparent_number() {
        let id = BlockId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: BlockId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
