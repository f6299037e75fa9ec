//! Cache store trait for abstracted caching operations.

use async_trait::async_trait;
use mercato_core::MercatoResult;
use shaku::Interface;
use std::time::Duration;

/// Key/value cache with TTL semantics.
///
/// Implementations treat values as opaque strings; serialization is the
/// caller's concern (see [`CacheExt`]). Every operation is bounded by the
/// backend's connection timeout. Callers on the read path must treat errors
/// as misses: the cache is an optimization, not a source of truth.
#[async_trait]
pub trait CacheStore: Interface + Send + Sync {
    /// Gets a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> MercatoResult<Option<String>>;

    /// Sets a raw value in the cache with a TTL. A zero TTL is a no-op:
    /// the entry would already be expired.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MercatoResult<()>;

    /// Deletes a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> MercatoResult<bool>;

    /// Deletes all keys sharing the given prefix.
    ///
    /// Returns the number of keys deleted. Safe to call concurrently with
    /// reads and writes on unrelated keys; removal is eventual, not
    /// instantaneous.
    async fn delete_prefix(&self, prefix: &str) -> MercatoResult<u64>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> MercatoResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheStore {
    /// Gets a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> MercatoResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Sets a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> MercatoResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheStore implementations
impl<T: CacheStore + ?Sized> CacheExt for T {}
