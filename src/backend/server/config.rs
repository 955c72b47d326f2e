/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default               |
 * |----------------|----------|-----------------------|
 * | `JWT_SECRET`   | yes      |                       |
 * | `DATABASE_URL` | yes      |                       |
 * | `PORT`         | no       | 3000                  |
 * | `BCRYPT_COST`  | no       | `bcrypt::DEFAULT_COST` |
 *
 * # Error Handling
 *
 * A missing secret or connection string is a `ConfigError`. The binary
 * treats it as fatal and exits before binding a socket.
 */

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Lifetime of an issued session token
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
///
/// Read once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct ServerConfig {
    /// Shared HMAC secret for session tokens
    pub jwt_secret: String,
    /// sqlx SQLite connection string
    pub database_url: String,
    /// TCP port to listen on
    pub port: u16,
    /// bcrypt cost factor for new password hashes
    pub bcrypt_cost: u32,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("PORT") {
            let port = port.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: port.clone(),
            })?;
            builder = builder.port(port);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            let cost = cost.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt cost factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let database_url = self
            .database_url
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("DATABASE_URL"))?;

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(ServerConfig {
            jwt_secret,
            database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost,
        })
    }
}

/// Open the SQLite pool and run migrations
///
/// In-memory databases live only as long as their connection, so they get a
/// single connection that is never recycled.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
