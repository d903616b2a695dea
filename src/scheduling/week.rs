//! Week scheduler layout.
//!
//! Given a reference date and the full block set, derives the
//! Monday-Sunday week containing that date and lays the blocks into a
//! fixed half-hour grid. A block is rendered once, anchored at the row
//! of its start time, spanning `ceil(duration / slot)` rows; the rows it
//! covers are suppressed so each `(day, slot)` coordinate is emitted by
//! exactly one cell.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::GridConfig;
use crate::models::{ClockTime, TimeBlock};

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The 7 consecutive dates (Monday through Sunday) containing `reference`.
///
/// Weeks are anchored to Monday regardless of locale: with Sunday = 0,
/// the offset back to Monday is `-6` for Sunday and `1 - dow` otherwise.
pub fn week_window(reference: NaiveDate) -> [NaiveDate; 7] {
    let dow = reference.weekday().num_days_from_sunday() as i64;
    let offset = if dow == 0 { -6 } else { 1 - dow };
    let monday = reference + Duration::days(offset);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Ordered slot labels from the opening hour to the closing hour.
///
/// The closing boundary is included as a final label, e.g. 06:00..21:30
/// in half-hour steps and then 22:00.
pub fn time_slots(config: &GridConfig) -> Vec<ClockTime> {
    let mut slots = Vec::new();
    let open = u32::from(config.open_hour) * 60;
    let close = u32::from(config.close_hour) * 60;
    let step = u32::from(config.slot_minutes.max(1));

    let mut minutes = open;
    while minutes < close {
        if let Ok(t) = ClockTime::from_hm((minutes / 60) as u16, (minutes % 60) as u16) {
            slots.push(t);
        }
        minutes += step;
    }
    if let Ok(t) = ClockTime::from_hm(config.close_hour, 0) {
        slots.push(t);
    }
    slots
}

/// Column header for one day of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHeader {
    pub date: NaiveDate,
    /// Weekday name ("Monday" .. "Sunday").
    pub name: String,
    /// Short `M/D` display form used in the header row.
    pub display: String,
    pub is_selected: bool,
}

/// One rendering directive of the week grid.
///
/// Slots covered by a spanning `Class` cell are not emitted at all, the
/// same way an HTML table omits cells under a rowspan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum WeekCell {
    /// No class starts here; renders as an empty slot.
    Open { day_index: usize },
    /// A class anchored at this row, spanning `row_span` rows downward.
    Class {
        day_index: usize,
        row_span: usize,
        available: bool,
        block: TimeBlock,
    },
}

impl WeekCell {
    pub fn day_index(&self) -> usize {
        match self {
            WeekCell::Open { day_index } => *day_index,
            WeekCell::Class { day_index, .. } => *day_index,
        }
    }
}

/// One time row of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRow {
    pub time: ClockTime,
    /// 12-hour label shown in the time column, e.g. "6:30am".
    pub label: String,
    pub cells: Vec<WeekCell>,
}

/// The full week grid for a selected date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub selected: NaiveDate,
    pub days: Vec<DayHeader>,
    pub rows: Vec<WeekRow>,
}

impl WeekGrid {
    /// Lay out the week containing `selected` from the full block set.
    ///
    /// Blocks are bucketed per day by exact date match, sorted by start
    /// time in minutes since midnight, and anchored at the row whose
    /// label equals their start time. Blocks starting off the slot grid
    /// or outside the operating window are not rendered, matching the
    /// exact-label anchoring of the original layout.
    pub fn build(selected: NaiveDate, blocks: &[TimeBlock], config: &GridConfig) -> Self {
        let week = week_window(selected);
        let slots = time_slots(config);

        let mut by_day: [Vec<&TimeBlock>; 7] = Default::default();
        for block in blocks {
            if let Some(day_index) = week.iter().position(|d| *d == block.date) {
                by_day[day_index].push(block);
            }
        }
        for bucket in by_day.iter_mut() {
            bucket.sort_by_key(|b| b.start_time.minutes());
        }

        let days = week
            .iter()
            .enumerate()
            .map(|(i, date)| DayHeader {
                date: *date,
                name: DAYS_OF_WEEK[i].to_string(),
                display: format!("{}/{}", date.month(), date.day()),
                is_selected: *date == selected,
            })
            .collect();

        // Slots already claimed by a spanning class cell, keyed by
        // (day index, row index).
        let mut covered: HashSet<(usize, usize)> = HashSet::new();
        let mut rows = Vec::with_capacity(slots.len());

        for (row_index, slot) in slots.iter().enumerate() {
            let mut cells = Vec::new();
            for (day_index, bucket) in by_day.iter().enumerate() {
                if covered.contains(&(day_index, row_index)) {
                    continue;
                }
                match bucket.iter().find(|b| b.start_time == *slot) {
                    Some(block) => {
                        let row_span = block_span(block, config);
                        for i in 0..row_span {
                            if row_index + i < slots.len() {
                                covered.insert((day_index, row_index + i));
                            }
                        }
                        cells.push(WeekCell::Class {
                            day_index,
                            row_span,
                            available: block.is_available(),
                            block: (*block).clone(),
                        });
                    }
                    None => cells.push(WeekCell::Open { day_index }),
                }
            }
            rows.push(WeekRow {
                time: *slot,
                label: slot.format_12h(),
                cells,
            });
        }

        Self {
            selected,
            days,
            rows,
        }
    }

    /// All class cells in row order, for assertions and summaries.
    pub fn class_cells(&self) -> impl Iterator<Item = &WeekCell> {
        self.rows.iter().flat_map(|row| {
            row.cells
                .iter()
                .filter(|c| matches!(c, WeekCell::Class { .. }))
        })
    }
}

/// Number of slot rows a block spans: `ceil(duration / slot)`, minimum 1.
pub fn block_span(block: &TimeBlock, config: &GridConfig) -> usize {
    let duration = u32::from(block.duration_minutes());
    let step = u32::from(config.slot_minutes.max(1));
    (duration.div_ceil(step)).max(1) as usize
}
