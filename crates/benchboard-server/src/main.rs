//! Scoreboard server binary for the Benchboard service.
//!
//! This is the main entry point that wires together configuration, the
//! `SQLite` event store, and the Axum API. It loads configuration,
//! connects the pool, runs migrations, and serves requests until the
//! process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `benchboard-config.yaml`
//! 3. Connect the `SQLite` pool and run migrations
//! 4. Build the shared application state (store, team directory, freeze flag)
//! 5. Serve the HTTP API

mod error;

use std::path::Path;
use std::sync::Arc;

use benchboard_api::{start_server, AppState, BoardConfig, ServerConfig};
use benchboard_db::{SqliteConfig, SqlitePool};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::StartupError;

/// Default configuration file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "benchboard-config.yaml";

/// Application entry point for the scoreboard server.
///
/// Initializes all subsystems and serves until terminated.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("benchboard-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        database_url = config.database.url,
        team_count = config.teams.len(),
        frozen = config.scoring.frozen,
        "Configuration loaded"
    );

    // 3. Connect the store and run migrations.
    let db_config = SqliteConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let pool = SqlitePool::connect(&db_config)
        .await
        .map_err(StartupError::from)?;
    pool.run_migrations().await.map_err(StartupError::from)?;

    // 4. Build shared application state.
    let state = Arc::new(AppState::new(
        pool,
        config.team_directory(),
        config.scoring.frozen,
    ));

    // 5. Serve.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state)
        .await
        .map_err(StartupError::from)?;

    Ok(())
}

/// Load configuration from `BENCHBOARD_CONFIG` or the default path.
///
/// A missing file is not fatal -- the service boots on defaults (with
/// an empty team directory) so a fresh checkout runs out of the box.
/// Environment overrides still apply in that case.
fn load_config() -> Result<BoardConfig, StartupError> {
    let path = std::env::var("BENCHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let path = Path::new(&path);

    if path.exists() {
        Ok(BoardConfig::from_file(path)?)
    } else {
        warn!(path = %path.display(), "Config file not found; using defaults");
        Ok(BoardConfig::parse("{}")?)
    }
}
