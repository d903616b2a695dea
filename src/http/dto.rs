//! Data Transfer Objects for the HTTP API.
//!
//! Domain types (profiles, blocks, grids) already derive
//! Serialize/Deserialize with camelCase field names, so they are
//! re-exported directly; this module adds the request/query wrappers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export domain types that serve as response bodies as-is.
pub use crate::api::{BlockId, MonthGrid, TimeBlock, UserProfile, WeekGrid};

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
}

/// Request body for booking a class slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Block being booked
    pub block_id: i64,
    /// Name to record on the slot
    pub customer_name: String,
}

/// Response for a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    /// The block as stored after the booking
    pub block: TimeBlock,
}

/// Query parameters for listing blocks in a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeQuery {
    /// Inclusive start date (YYYY-MM-DD)
    pub start: NaiveDate,
    /// Inclusive end date (YYYY-MM-DD)
    pub end: NaiveDate,
}

/// Query parameters for the week-schedule endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekQuery {
    /// Any date inside the requested week (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Query parameters for the month-calendar endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    /// Zero-based month index (0 = January)
    pub month: u32,
}

/// Response for a profile-picture upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL of the stored image, e.g. `/uploads/<uuid>.png`
    pub image_url: String,
}
