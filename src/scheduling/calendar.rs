//! Month grid derivation for the date-picker calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::TimeBlock;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month grid.
///
/// `day` is `None` for the blank padding cells before the first and
/// after the last day of the month; blank cells are inert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_past: bool,
    pub has_event: bool,
}

/// A month rendered as complete week rows of 7 cells, Sunday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    /// 0-based month index (0 = January).
    pub month: u32,
    pub month_name: String,
    pub weeks: Vec<[CalendarCell; 7]>,
}

/// Error for out-of-range month grid requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month grid request: year {year}, month index {month}")]
pub struct InvalidMonth {
    pub year: i32,
    pub month: u32,
}

impl MonthGrid {
    /// Derive the grid for `(year, month)` from the full block set.
    ///
    /// The first day of the month lands in the column of its weekday
    /// (Sunday = column 0); blank cells pad the first and last rows so
    /// every row has exactly 7 cells. `today` is the render-time date,
    /// passed in so callers and tests control it.
    pub fn build(
        year: i32,
        month: u32,
        blocks: &[TimeBlock],
        today: NaiveDate,
    ) -> Result<Self, InvalidMonth> {
        if month > 11 {
            return Err(InvalidMonth { year, month });
        }
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
            .ok_or(InvalidMonth { year, month })?;

        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(first);

        let event_dates: HashSet<NaiveDate> = blocks.iter().map(|b| b.date).collect();

        let mut cells: Vec<CalendarCell> = Vec::with_capacity(leading + days as usize);
        cells.resize(leading, CalendarCell::default());

        for day in 1..=days {
            // Unwrap is fine: day is within the month by construction.
            let date = first.with_day(day).unwrap_or(first);
            cells.push(CalendarCell {
                day: Some(day),
                is_today: date == today,
                is_past: date < today,
                has_event: event_dates.contains(&date),
            });
        }

        while cells.len() % 7 != 0 {
            cells.push(CalendarCell::default());
        }

        let weeks = cells
            .chunks_exact(7)
            .map(|chunk| {
                let mut row: [CalendarCell; 7] = Default::default();
                row.clone_from_slice(chunk);
                row
            })
            .collect();

        Ok(Self {
            year,
            month,
            month_name: MONTH_NAMES[month as usize].to_string(),
            weeks,
        })
    }

    /// Total number of cells (always a multiple of 7).
    pub fn cell_count(&self) -> usize {
        self.weeks.len() * 7
    }

    /// The date a non-blank cell represents.
    pub fn cell_date(&self, cell: &CalendarCell) -> Option<NaiveDate> {
        let day = cell.day?;
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }
}

/// Number of days in the month containing `first` (the first of the month).
fn days_in_month(first: NaiveDate) -> u32 {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_month {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Month/year cursor for calendar navigation.
///
/// Advancing past December rolls the year forward explicitly, and
/// retreating past January rolls it back, matching native date
/// arithmetic where incrementing a month field past 11 carries into
/// the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    /// 0-based month index (0 = January).
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month: month.min(11) }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Construct the `YYYY-MM-DD` date for a clicked day cell.
pub fn selected_date(day: u32, month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month + 1, day)
}
