//! HTTP layer tests that invoke handlers directly with constructed
//! extractors, avoiding a live server.

mod support;

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use balanse_rust::db::repositories::LocalRepository;
use balanse_rust::db::repository::FullRepository;
use balanse_rust::http::handlers;
use balanse_rust::http::dto::{BookingRequest, MonthQuery, RangeQuery, WeekQuery};
use balanse_rust::http::AppState;
use balanse_rust::models::UserProfile;
use support::date;

fn seeded_state() -> AppState {
    let repo =
        Arc::new(LocalRepository::with_sample_schedule()) as Arc<dyn FullRepository>;
    AppState::new(repo)
}

#[tokio::test]
async fn test_health_reports_connected_storage() {
    let Json(health) = handlers::health_check(State(seeded_state())).await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.storage, "connected");
}

#[tokio::test]
async fn test_user_upsert_get_update_cycle() {
    let state = seeded_state();

    let mut profile = UserProfile::new("uid-1");
    profile.first_name = Some("Jane".to_string());
    handlers::upsert_user(State(state.clone()), Json(profile.clone()))
        .await
        .unwrap();

    let Json(fetched) = handlers::get_user(State(state.clone()), Path("uid-1".to_string()))
        .await
        .unwrap();
    assert_eq!(fetched.first_name.as_deref(), Some("Jane"));

    let mut updated = fetched.clone();
    updated.city = Some("Portland".to_string());
    let Json(stored) = handlers::update_user(
        State(state.clone()),
        Path("uid-1".to_string()),
        Json(updated),
    )
    .await
    .unwrap();
    assert_eq!(stored.city.as_deref(), Some("Portland"));

    let err = handlers::get_user(State(state), Path("ghost".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upsert_rejects_blank_uid() {
    let err = handlers::upsert_user(State(seeded_state()), Json(UserProfile::new("  ")))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_blocks_validates_range() {
    let state = seeded_state();

    let Json(blocks) = handlers::list_blocks(
        State(state.clone()),
        Query(RangeQuery {
            start: date(2025, 1, 13),
            end: date(2025, 1, 19),
        }),
    )
    .await
    .unwrap();
    assert_eq!(blocks.len(), 8);

    let err = handlers::list_blocks(
        State(state),
        Query(RangeQuery {
            start: date(2025, 1, 19),
            end: date(2025, 1, 13),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_success_then_conflict() {
    let state = seeded_state();

    let Json(response) = handlers::create_booking(
        State(state.clone()),
        Json(BookingRequest {
            block_id: 1,
            customer_name: "Jane Doe".to_string(),
        }),
    )
    .await
    .unwrap();
    assert!(response.success);
    assert_eq!(response.block.occupant.as_deref(), Some("Jane Doe"));

    let err = handlers::create_booking(
        State(state),
        Json(BookingRequest {
            block_id: 1,
            customer_name: "John Smith".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_booking_unknown_block_is_404() {
    let err = handlers::create_booking(
        State(seeded_state()),
        Json(BookingRequest {
            block_id: 9999,
            customer_name: "Jane Doe".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_week_schedule_endpoint_lays_out_sample_week() {
    let Json(grid) = handlers::get_week_schedule(
        State(seeded_state()),
        Query(WeekQuery {
            date: date(2025, 1, 15),
        }),
    )
    .await
    .unwrap();

    assert_eq!(grid.days[0].date, date(2025, 1, 13));
    assert_eq!(grid.rows.len(), 33);
    assert_eq!(grid.class_cells().count(), 7);
}

#[tokio::test]
async fn test_month_calendar_endpoint() {
    let Json(grid) = handlers::get_month_calendar(
        State(seeded_state()),
        Query(MonthQuery {
            year: 2025,
            month: 0,
        }),
    )
    .await
    .unwrap();

    assert_eq!(grid.month_name, "January");
    // January 2025 starts on a Wednesday: 3 leading blanks, 31 days,
    // padded to 35 cells.
    assert_eq!(grid.cell_count(), 35);
    let event_days: Vec<u32> = grid
        .weeks
        .iter()
        .flatten()
        .filter(|c| c.has_event)
        .filter_map(|c| c.day)
        .collect();
    assert_eq!(event_days, vec![15, 16, 17, 18, 19]);
}

#[tokio::test]
async fn test_month_calendar_rejects_bad_month_index() {
    let err = handlers::get_month_calendar(
        State(seeded_state()),
        Query(MonthQuery {
            year: 2025,
            month: 12,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}
