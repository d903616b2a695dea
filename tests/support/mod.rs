//! Shared helpers for integration tests.

use balanse_rust::api::BlockId;
use balanse_rust::models::{ClockTime, TimeBlock};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u16, m: u16) -> ClockTime {
    ClockTime::from_hm(h, m).unwrap()
}

/// An unbooked class block with placeholder label and owner.
pub fn open_block(
    id: i64,
    on: NaiveDate,
    start: (u16, u16),
    end: (u16, u16),
) -> TimeBlock {
    TimeBlock {
        id: BlockId::new(id),
        date: on,
        start_time: time(start.0, start.1),
        end_time: time(end.0, end.1),
        label: "Yoga".to_string(),
        owner_name: "Sarah Chen".to_string(),
        occupant: None,
    }
}
