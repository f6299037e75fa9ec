//! Caching layer: key codec, store contract, and backends.

pub mod cache_keys;
mod cache_interface;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheStore};
pub use memory_cache::InMemoryCacheStore;
pub use redis_cache::{RedisCacheStore, RedisCacheStoreParameters, DEFAULT_TTL, FEATURE_TTL};
