//! Configuration for the Pinboard service binary.
//!
//! All configuration is loaded from environment variables. The service
//! needs to know how to reach `PostgreSQL` and where to listen; the
//! database credentials arrive as two separate values (URL plus optional
//! auth token) that the data layer assembles into one connection.

use crate::error::ServiceError;

/// Default listen host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
const DEFAULT_PORT: &str = "8080";

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Optional auth token applied as the database connection password.
    pub database_auth_token: Option<String>,
    /// Host address to bind the HTTP server to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `DATABASE_AUTH_TOKEN` -- auth token applied as the connection
    ///   password
    /// - `HOST` -- listen address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default `8080`)
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] if a required variable is missing
    /// or a value fails to parse.
    pub fn from_env() -> Result<Self, ServiceError> {
        let database_url = env_var("DATABASE_URL")?;
        let database_auth_token = std::env::var("DATABASE_AUTH_TOKEN").ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_owned())
            .parse()
            .map_err(|e| ServiceError::Config(format!("invalid PORT: {e}")))?;

        Ok(Self {
            database_url,
            database_auth_token,
            host,
            port,
        })
    }
}

/// Read a required environment variable.
fn env_var(name: &str) -> Result<String, ServiceError> {
    std::env::var(name)
        .map_err(|e| ServiceError::Config(format!("missing required env var {name}: {e}")))
}
