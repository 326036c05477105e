//! Environment-driven configuration for hosting the board.
//!
//! Settings are read from `BOARD_`-prefixed environment variables:
//!
//! | Variable             | Default                 |
//! |----------------------|-------------------------|
//! | `BOARD_DATABASE_URL` | unset                   |
//! | `BOARD_BASE_URL`     | `http://localhost:8000` |
//! | `BOARD_API_PREFIX`   | `/api`                  |
//! | `BOARD_POOL_SIZE`    | `4`                     |

use crate::board::adapters::{PrefixUrlResolver, postgres::BoardPgPool};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "BOARD";

/// Errors raised while loading configuration or building resources from it.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration sources could not be read or deserialised.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// A database pool was requested without a database URL.
    #[error("BOARD_DATABASE_URL is not set")]
    MissingDatabaseUrl,
    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Runtime settings for the board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// `PostgreSQL` connection URL.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Origin used for absolute resource links.
    pub base_url: String,
    /// Path prefix every resource route is mounted under.
    pub api_prefix: String,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
}

impl BoardConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Load`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, BoardConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit set of `BOARD_`-prefixed
    /// variables instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Load`] when a variable cannot be parsed.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, BoardConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(environment: config::Environment) -> Result<Self, BoardConfigError> {
        let settings = config::Config::builder()
            .set_default("base_url", "http://localhost:8000")?
            .set_default("api_prefix", "/api")?
            .set_default("pool_size", 4)?
            .add_source(environment.try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Builds the URL resolver for representation links.
    #[must_use]
    pub fn url_resolver(&self) -> PrefixUrlResolver {
        PrefixUrlResolver::new(self.base_url.as_str(), self.api_prefix.as_str())
    }

    /// Builds a `PostgreSQL` connection pool for the postgres adapters.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::MissingDatabaseUrl`] when no URL is
    /// configured or [`BoardConfigError::Pool`] when the pool cannot connect.
    pub fn connection_pool(&self) -> Result<BoardPgPool, BoardConfigError> {
        let url = self
            .database_url
            .as_deref()
            .ok_or(BoardConfigError::MissingDatabaseUrl)?;
        let manager = ConnectionManager::<PgConnection>::new(url);
        Ok(Pool::builder().max_size(self.pool_size).build(manager)?)
    }
}
