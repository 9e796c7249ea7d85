//! In-memory IV cache.
//!
//! Per-process memoization only; every server instance warms its own copy.
//! Once `capacity` entries are stored, new shortlinks are served uncached
//! while existing entries keep hitting.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::pokemon::IvSpread;
use crate::ports::IvCache;

#[derive(Debug, Clone)]
pub struct InMemoryIvCache {
    capacity: usize,
    entries: Arc<RwLock<HashMap<String, IvSpread>>>,
}

impl InMemoryIvCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl IvCache for InMemoryIvCache {
    async fn get(&self, shortlink: &str) -> Option<IvSpread> {
        self.entries.read().await.get(shortlink).copied()
    }

    async fn put(&self, shortlink: String, spread: IvSpread) {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.capacity && !entries.contains_key(&shortlink) {
            tracing::debug!("IV cache full ({} entries), skipping {}", self.capacity, shortlink);
            return;
        }
        entries.insert(shortlink, spread);
    }
}
