//! Calendar and week-grid derivation.
//!
//! Two presentation-layer algorithms live here:
//!
//! - [`calendar`]: month grid derivation for the date picker, including
//!   leading/trailing blank cells and per-day event flags.
//! - [`week`]: Monday-anchored week derivation and the time-by-day grid
//!   layout, where each block occupies a vertical span of fixed-size
//!   slots and covered slots are suppressed.
//!
//! Both are pure: they read blocks supplied by the repository and never
//! mutate them. Booking goes through `services::booking`.

pub mod calendar;
pub mod week;


use serde::{Deserialize, Serialize};

/// Studio operating window and slot granularity for the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// First hour of the operating window (inclusive).
    #[serde(default = "default_open_hour")]
    pub open_hour: u16,
    /// Last hour of the operating window; its `:00` label is the final row.
    #[serde(default = "default_close_hour")]
    pub close_hour: u16,
    /// Slot granularity in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u16,
}

fn default_open_hour() -> u16 {
    6
}

fn default_close_hour() -> u16 {
    22
}

fn default_slot_minutes() -> u16 {
    30
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

pub use calendar::{CalendarCell, MonthCursor, MonthGrid};
pub use week::{week_window, DayHeader, WeekCell, WeekGrid, WeekRow};
