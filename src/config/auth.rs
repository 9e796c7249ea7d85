//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 key length accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Authentication configuration (shared-secret JWT)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret the tokens are signed with
    pub jwt_secret: SecretString,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
        }
    }

    /// Validate authentication configuration
    ///
    /// Production deployments must use a secret of at least
    /// [`MIN_PRODUCTION_SECRET_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_missing() {
        let config = AuthConfig::new("");
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("JWT_SECRET"))
        );
    }

    #[test]
    fn test_short_secret_allowed_in_development() {
        let config = AuthConfig::new("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_short_secret_rejected_in_production() {
        let config = AuthConfig::new("dev-secret");
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN))
        );
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let config = AuthConfig::new("super-secret-value");
        assert!(!format!("{:?}", config).contains("super-secret-value"));
    }
}
