//! Balanse Studio HTTP Server Binary
//!
//! This is the main entry point for the studio booking REST API server.
//! It loads configuration, initializes the repository, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository (default)
//! cargo run --bin balanse-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Overrides the configured repository type
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use balanse_rust::config::StudioConfig;
use balanse_rust::db::factory::{RepositoryFactory, RepositoryType};
use balanse_rust::db::repositories::LocalRepository;
use balanse_rust::db::repository::FullRepository;
use balanse_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Balanse Studio HTTP Server");

    // Load configuration (falls back to defaults when studio.toml is absent)
    let config = StudioConfig::from_default_location();

    let repo_type = match env::var("REPOSITORY_TYPE") {
        Ok(val) => RepositoryType::from_str(&val).map_err(|e| anyhow::anyhow!(e))?,
        Err(_) => config.repository_type().map_err(|e| anyhow::anyhow!(e))?,
    };

    let repository: std::sync::Arc<dyn FullRepository> = if config.repository.seed_sample {
        match repo_type {
            RepositoryType::Local => {
                warn!("seeding local repository with the sample schedule");
                std::sync::Arc::new(LocalRepository::with_sample_schedule())
            }
        }
    } else {
        RepositoryFactory::create(repo_type, config.booking.overlap_policy)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
    };
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::with_settings(repository, config.grid(), config.upload.dir.clone());

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health endpoint: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
