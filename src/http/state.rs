//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::scheduling::GridConfig;
use crate::services::booking::BookingCoordinator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn FullRepository>,
    /// Serialized booking submissions
    pub booking: Arc<BookingCoordinator>,
    /// Week-grid layout parameters
    pub grid: GridConfig,
    /// Directory where profile pictures are written
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Create application state with the default grid and upload dir.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self::with_settings(repository, GridConfig::default(), PathBuf::from("uploads"))
    }

    /// Create application state with explicit settings.
    pub fn with_settings(
        repository: Arc<dyn FullRepository>,
        grid: GridConfig,
        upload_dir: PathBuf,
    ) -> Self {
        let booking = Arc::new(BookingCoordinator::new(repository.clone()));
        Self {
            repository,
            booking,
            grid,
            upload_dir,
        }
    }
}
