//! High-level business logic built on top of the repository layer.

pub mod booking;

pub use booking::{BookingCoordinator, BookingError, BookingState};
