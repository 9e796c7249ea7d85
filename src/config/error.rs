//! Configuration error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was missing or could not be parsed.
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that is well-formed but unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Timeout out of range")]
    InvalidTimeout,

    #[error("Database URL must be a mysql:// or mariadb:// URL")]
    InvalidDatabaseUrl,

    #[error("Pool needs 1..=max connections with min <= max")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed ({max})", max = super::database::MAX_POOL_SIZE)]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),

    #[error("IV cache capacity must be greater than zero")]
    InvalidCacheCapacity,
}
