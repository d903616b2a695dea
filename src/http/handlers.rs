//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer or the scheduling module for the actual work.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Local, NaiveDate};
use uuid::Uuid;

use super::dto::{
    BookingRequest, BookingResponse, HealthResponse, MonthQuery, RangeQuery, UploadResponse,
    WeekQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::BlockId;
use crate::db::services as db_services;
use crate::models::UserProfile;
use crate::scheduling::{MonthCursor, MonthGrid, WeekGrid};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the storage backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let storage = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        storage,
    }))
}

// =============================================================================
// User Profiles
// =============================================================================

/// POST /v1/users
///
/// Create or replace a profile. Safe to retry: resubmitting the same
/// payload yields the same stored profile.
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> HandlerResult<UserProfile> {
    if profile.uid.trim().is_empty() {
        return Err(AppError::BadRequest("uid must not be empty".to_string()));
    }
    let stored = db_services::upsert_user_profile(state.repository.as_ref(), &profile).await?;
    Ok(Json(stored))
}

/// GET /v1/users/{uid}
pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> HandlerResult<UserProfile> {
    let profile = db_services::get_user_profile(state.repository.as_ref(), &uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {} not found", uid)))?;
    Ok(Json(profile))
}

/// PUT /v1/users/{uid}
pub async fn update_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(profile): Json<UserProfile>,
) -> HandlerResult<UserProfile> {
    let stored = db_services::update_user_profile(state.repository.as_ref(), &uid, &profile).await?;
    Ok(Json(stored))
}

// =============================================================================
// Blocks and Bookings
// =============================================================================

/// GET /v1/blocks?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn list_blocks(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> HandlerResult<Vec<crate::models::TimeBlock>> {
    if range.start > range.end {
        return Err(AppError::BadRequest(format!(
            "start {} is after end {}",
            range.start, range.end
        )));
    }
    let blocks =
        db_services::list_blocks_in_range(state.repository.as_ref(), range.start, range.end)
            .await?;
    Ok(Json(blocks))
}

/// POST /v1/bookings
///
/// Book a class slot. Exactly one of any set of concurrent requests for
/// the same slot succeeds; the rest receive 409.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> HandlerResult<BookingResponse> {
    let block = state
        .booking
        .book(BlockId::new(request.block_id), &request.customer_name)
        .await?;

    Ok(Json(BookingResponse {
        success: true,
        message: format!(
            "{} booked for {}",
            block.label,
            block.occupant.as_deref().unwrap_or_default()
        ),
        block,
    }))
}

// =============================================================================
// Schedule Views
// =============================================================================

/// GET /v1/schedule/week?date=YYYY-MM-DD
///
/// The laid-out week grid for the week containing `date`.
pub async fn get_week_schedule(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> HandlerResult<WeekGrid> {
    let blocks = db_services::list_week_blocks(state.repository.as_ref(), query.date).await?;
    let grid = WeekGrid::build(query.date, &blocks, &state.grid);
    Ok(Json(grid))
}

/// GET /v1/schedule/month?year=YYYY&month=M
///
/// The month calendar grid; `month` is the 0-based month index.
pub async fn get_month_calendar(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> HandlerResult<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(query.year, query.month + 1, 1).ok_or_else(|| {
        AppError::BadRequest(format!(
            "invalid month: year {}, month index {}",
            query.year, query.month
        ))
    })?;
    let next = MonthCursor::new(query.year, query.month).next();
    let last = NaiveDate::from_ymd_opt(next.year, next.month + 1, 1)
        .map(|d| d - Duration::days(1))
        .unwrap_or(first);

    let blocks = db_services::list_blocks_in_range(state.repository.as_ref(), first, last).await?;
    let today = Local::now().date_naive();

    let grid = MonthGrid::build(query.year, query.month, &blocks, today)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(Json(grid))
}

// =============================================================================
// Uploads
// =============================================================================

const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// POST /v1/upload/profile-picture
///
/// Accepts a multipart form with a `profilePicture` image field and
/// stores it under a fresh name, returning its public URL.
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("profilePicture") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::BadRequest(
                "Only .png, .jpg and .jpeg files are allowed!".to_string(),
            ));
        }

        let extension = match content_type.as_str() {
            "image/png" => "png",
            _ => "jpg",
        };
        let filename = format!("{}.{}", Uuid::new_v4(), extension);

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {}", e)))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("uploaded file is empty".to_string()));
        }

        tokio::fs::create_dir_all(&state.upload_dir)
            .await
            .map_err(|e| AppError::Internal(format!("failed to create upload dir: {}", e)))?;
        let path = state.upload_dir.join(&filename);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("failed to store upload: {}", e)))?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                image_url: format!("/uploads/{}", filename),
            }),
        ));
    }

    Err(AppError::BadRequest(
        "missing profilePicture field".to_string(),
    ))
}
