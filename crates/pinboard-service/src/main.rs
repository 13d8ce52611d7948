//! Pinboard service binary.
//!
//! Wires the data layer to the HTTP + `WebSocket` server: loads
//! configuration from the environment, connects to `PostgreSQL`,
//! provisions the schema, and serves until terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from environment variables
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Build the shared application state
//! 5. Serve HTTP until the process is terminated
//!
//! Any failure before serving is fatal: the error is reported and the
//! process exits non-zero.

mod config;
mod error;

use std::sync::Arc;

use pinboard_db::{PgPostStore, PostgresConfig, PostgresPool};
use pinboard_server::{AppState, PageRenderer, ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Application entry point for the Pinboard service.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself
/// fails.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pinboard-service starting");

    // 2. Load configuration.
    let config = ServiceConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        auth_token = config.database_auth_token.is_some(),
        "Configuration loaded"
    );

    // 3. Connect to the database and provision the schema.
    let mut pg_config = PostgresConfig::new(&config.database_url);
    if let Some(token) = &config.database_auth_token {
        pg_config = pg_config.with_auth_token(token);
    }

    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // 4. Build the shared application state.
    let posts = Arc::new(PgPostStore::new(pool.pool().clone()));
    let pages = PageRenderer::new()?;
    let state = Arc::new(AppState::new(posts, pages));

    // 5. Serve until terminated.
    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    pool.close().await;
    Ok(())
}
