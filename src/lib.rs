//! # Balanse Studio Backend
//!
//! Booking and scheduling engine for a yoga studio.
//!
//! This crate derives the studio's calendar and week-scheduler views
//! from a flat set of class time blocks, coordinates atomic slot
//! bookings, and manages collaborator profiles. The backend exposes a
//! REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Calendar**: Month grids with event markers, today/past flags,
//!   and explicit year-rollover navigation
//! - **Week Scheduler**: Monday-anchored week layout over a fixed
//!   half-hour slot grid with row-spanning class cells
//! - **Bookings**: First-come-first-served slot booking with a single
//!   in-flight submission per coordinator
//! - **Profiles**: Idempotent collaborator profile upsert and
//!   profile-picture uploads
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and re-exported wire types
//! - [`models`]: Domain types (blocks, clock times, profiles)
//! - [`scheduling`]: Month and week grid derivation
//! - [`services`]: Booking coordination
//! - [`db`]: Repository pattern and storage service layer
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod scheduling;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
