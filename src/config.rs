//! Application configuration file support.
//!
//! Settings are read from a `studio.toml` TOML file with serde
//! defaults, so a missing file or a partial file both work. Host/port
//! come from environment variables in the server binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::db::factory::RepositoryType;
use crate::db::repository::{OverlapPolicy, RepositoryError};
use crate::scheduling::GridConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub booking: BookingSettings,
    #[serde(default)]
    pub schedule: GridConfig,
    #[serde(default)]
    pub upload: UploadSettings,
}

/// Repository selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    /// Seed the local repository with the sample schedule on startup.
    #[serde(default)]
    pub seed_sample: bool,
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            seed_sample: false,
        }
    }
}

/// Booking-contract settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingSettings {
    /// Write-time policy for overlapping blocks on the same day.
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
}

/// Profile-picture upload settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_upload_dir")]
    pub dir: PathBuf,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: StudioConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations, falling back to
    /// built-in defaults when no `studio.toml` exists.
    pub fn from_default_location() -> Self {
        let search_paths = [
            PathBuf::from("studio.toml"),
            PathBuf::from("../studio.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                if let Ok(config) = Self::from_file(&path) {
                    return config;
                }
            }
        }

        Self::default()
    }

    /// Parsed repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// The week-grid configuration.
    pub fn grid(&self) -> GridConfig {
        self.schedule
    }
}
