//! In-process cache configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of memoized IV lookups
    #[serde(default = "default_iv_cache_capacity")]
    pub iv_cache_capacity: usize,
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iv_cache_capacity == 0 {
            return Err(ValidationError::InvalidCacheCapacity);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            iv_cache_capacity: default_iv_cache_capacity(),
        }
    }
}

fn default_iv_cache_capacity() -> usize {
    100_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.iv_cache_capacity, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = CacheConfig {
            iv_cache_capacity: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCacheCapacity));
    }
}
