//! In-process cache adapters.

mod in_memory_iv_cache;

pub use in_memory_iv_cache::InMemoryIvCache;
