//! IV cache port.
//!
//! Memoizes decoded IV spreads keyed by the shortlink string exactly as the
//! client sent it. IVs never change once a Pokémon exists, so entries are
//! never invalidated.

use async_trait::async_trait;

use crate::domain::pokemon::IvSpread;

#[async_trait]
pub trait IvCache: Send + Sync {
    async fn get(&self, shortlink: &str) -> Option<IvSpread>;

    /// Stores a spread. Implementations may drop the entry when full.
    async fn put(&self, shortlink: String, spread: IvSpread);
}
