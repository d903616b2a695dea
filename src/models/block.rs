use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::time::ClockTime;
use crate::api::BlockId;

/// Sentinel occupant name used by legacy clients to mean "no occupant".
///
/// New payloads should omit the field or send `null`; the deserializer
/// normalizes the sentinel (and the empty string) to `None`.
pub const UNBOOKED_SENTINEL: &str = "Available";

/// A schedulable class slot: one class, one instructor, one date and
/// time range, and at most one occupant.
///
/// Blocks are owned by the repository. Callers never mutate a block in
/// place; booking goes through the repository so the occupant can only
/// change under its atomicity guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: BlockId,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Class type, e.g. "Power Yoga".
    pub label: String,
    /// Instructor display name.
    pub owner_name: String,
    /// Display name of the booker; `None` means the slot is open.
    #[serde(default, deserialize_with = "deserialize_occupant")]
    pub occupant: Option<String>,
}

/// Error returned when a block's time range is degenerate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("block {id}: start time {start} is not before end time {end}")]
pub struct InvalidTimeRange {
    pub id: BlockId,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeBlock {
    /// A block is available iff it has no occupant.
    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }

    /// Check the `start < end` invariant.
    pub fn validate(&self) -> Result<(), InvalidTimeRange> {
        if self.start_time >= self.end_time {
            return Err(InvalidTimeRange {
                id: self.id,
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Copy of this block with the given occupant.
    pub fn with_occupant(&self, occupant: impl Into<String>) -> Self {
        Self {
            occupant: Some(occupant.into()),
            ..self.clone()
        }
    }
}

fn deserialize_occupant<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_occupant(raw))
}

/// Map the legacy unbooked sentinel and the empty string to `None`.
pub fn normalize_occupant(raw: Option<String>) -> Option<String> {
    match raw {
        Some(s) if s.is_empty() || s == UNBOOKED_SENTINEL => None,
        other => other,
    }
}
