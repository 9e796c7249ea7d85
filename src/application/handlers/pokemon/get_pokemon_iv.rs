//! GetPokemonIvHandler - public IV lookup by shortlink.
//!
//! Lookups are memoized per shortlink string, so `"0J"` and `"J"` are cached
//! separately even though they name the same row.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::pokemon::IvSpread;
use crate::domain::shortlink;
use crate::ports::{IvCache, PokemonReader};

#[derive(Debug, Clone)]
pub struct GetPokemonIvQuery {
    pub shortlink: Option<String>,
}

/// Decoded spread and whether it came from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IvLookup {
    pub value: IvSpread,
    pub cached: bool,
}

/// IV lookup failures. The first three are client-visible "not found"
/// conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IvLookupError {
    MissingId,
    InvalidShortLink,
    NotFound,
    Infrastructure(String),
}

impl IvLookupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            IvLookupError::MissingId | IvLookupError::InvalidShortLink => {
                ErrorCode::ValidationFailed
            }
            IvLookupError::NotFound => ErrorCode::PokemonNotFound,
            IvLookupError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            IvLookupError::MissingId => "Invalid ID: No ID provided".to_string(),
            IvLookupError::InvalidShortLink => "Invalid ID: Invalid shortlink".to_string(),
            IvLookupError::NotFound => "Failed to fetch IV.".to_string(),
            IvLookupError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for IvLookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for IvLookupError {}

impl From<DomainError> for IvLookupError {
    fn from(err: DomainError) -> Self {
        IvLookupError::Infrastructure(err.to_string())
    }
}

pub struct GetPokemonIvHandler {
    pokemon: Arc<dyn PokemonReader>,
    cache: Arc<dyn IvCache>,
}

impl GetPokemonIvHandler {
    pub fn new(pokemon: Arc<dyn PokemonReader>, cache: Arc<dyn IvCache>) -> Self {
        Self { pokemon, cache }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, query: GetPokemonIvQuery) -> Result<IvLookup, IvLookupError> {
        let key = query
            .shortlink
            .filter(|s| !s.is_empty())
            .ok_or(IvLookupError::MissingId)?;

        if let Some(value) = self.cache.get(&key).await {
            return Ok(IvLookup {
                value,
                cached: true,
            });
        }

        let pokemon_id = shortlink::decode(&key).map_err(|e| {
            tracing::debug!("Rejected shortlink {:?}: {}", key, e);
            IvLookupError::InvalidShortLink
        })?;

        let packed = self
            .pokemon
            .packed_iv(pokemon_id)
            .await?
            .ok_or(IvLookupError::NotFound)?;

        let value = IvSpread::decode(packed);
        self.cache.put(key, value).await;

        Ok(IvLookup {
            value,
            cached: false,
        })
    }
}
