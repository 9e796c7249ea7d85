//! Typed configuration, loaded from the environment.
//!
//! Variables use the `PKMN_API` prefix with `__` between path segments, and a
//! `.env` file is honoured in development:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `PKMN_API__SERVER__PORT` | `server.port` |
//! | `PKMN_API__SERVER__LOG_FORMAT` | `server.log_format` (`text` / `json`) |
//! | `PKMN_API__DATABASE__URL` | `database.url` |
//! | `PKMN_API__DATABASE__POOL__MAX_CONNECTIONS` | `database.pool.max_connections` |
//! | `PKMN_API__AUTH__JWT_SECRET` | `auth.jwt_secret` |
//! | `PKMN_API__CACHE__IV_CACHE_CAPACITY` | `cache.iv_cache_capacity` |
//!
//! ```no_run
//! use pkmn_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! println!("Listening on {}", config.server.socket_addr());
//! ```

mod auth;
mod cache;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_LEN};
pub use cache::CacheConfig;
pub use database::{DatabaseConfig, PoolConfig, MAX_POOL_SIZE};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

const ENV_PREFIX: &str = "PKMN_API";
const ENV_SEPARATOR: &str = "__";

/// Root configuration. Only `database.url` and `auth.jwt_secret` are required.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub auth: AuthConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Loads `.env` (if present) and then the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when a required variable is missing
    /// or a value does not parse into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env(None)
    }

    /// `vars` replaces the process environment when given.
    fn from_env(vars: Option<config::Map<String, String>>) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates every section, stopping at the first error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.cache.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
