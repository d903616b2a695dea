//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // User profiles
        .route("/users", post(handlers::upsert_user))
        .route("/users/{uid}", get(handlers::get_user))
        .route("/users/{uid}", put(handlers::update_user))
        // Class slots and bookings
        .route("/blocks", get(handlers::list_blocks))
        .route("/bookings", post(handlers::create_booking))
        // Schedule views
        .route("/schedule/week", get(handlers::get_week_schedule))
        .route("/schedule/month", get(handlers::get_month_calendar))
        // Uploads
        .route(
            "/upload/profile-picture",
            post(handlers::upload_profile_picture),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .nest_service("/uploads", ServeDir::new(state.upload_dir.clone()))
        // Profile pictures can be a few megabytes.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
