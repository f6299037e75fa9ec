//! In-memory cache store with TTL support.
//!
//! Backs tests and cache-less deployments. Time is read through an internal
//! offset so tests can advance the clock without sleeping.

use super::CacheStore;
use async_trait::async_trait;
use mercato_core::MercatoResult;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with per-entry TTLs.
pub struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, Entry>>,
    clock_offset: Mutex<Duration>,
}

impl InMemoryCacheStore {
    /// Creates an empty cache store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock_offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Advances the cache's notion of "now" by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut offset = self.clock_offset.lock().expect("clock poisoned");
        *offset += delta;
    }

    /// Number of live (possibly expired, not yet swept) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("entries poisoned").len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn now(&self) -> Instant {
        Instant::now() + *self.clock_offset.lock().expect("clock poisoned")
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> MercatoResult<Option<String>> {
        let now = self.now();
        let mut entries = self.entries.lock().expect("entries poisoned");
        match entries.get(key) {
            Some(entry) if now < entry.expires_at => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MercatoResult<()> {
        if ttl.is_zero() {
            return Ok(());
        }
        let expires_at = self.now() + ttl;
        let mut entries = self.entries.lock().expect("entries poisoned");
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> MercatoResult<bool> {
        let mut entries = self.entries.lock().expect("entries poisoned");
        Ok(entries.remove(key).is_some())
    }

    async fn delete_prefix(&self, prefix: &str) -> MercatoResult<u64> {
        let mut entries = self.entries.lock().expect("entries poisoned");
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok((before - entries.len()) as u64)
    }

    async fn ping(&self) -> MercatoResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCacheStore")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheExt;

    #[tokio::test]
    async fn test_set_then_get_roundtrip() {
        let cache = InMemoryCacheStore::new();
        cache
            .set("recs:7:aaaa", &vec![1, 2, 3], Duration::from_secs(300))
            .await
            .unwrap();
        let value: Option<Vec<i32>> = cache.get("recs:7:aaaa").await.unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_zero_ttl_is_absent() {
        let cache = InMemoryCacheStore::new();
        cache
            .set_raw("recs:7:aaaa", "[]", Duration::ZERO)
            .await
            .unwrap();
        assert!(cache.get_raw("recs:7:aaaa").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entry_expires_when_clock_advances() {
        let cache = InMemoryCacheStore::new();
        cache
            .set_raw("recs:7:aaaa", "[]", Duration::from_secs(300))
            .await
            .unwrap();
        assert!(cache.get_raw("recs:7:aaaa").await.unwrap().is_some());

        cache.advance(Duration::from_secs(301));
        assert!(cache.get_raw("recs:7:aaaa").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_prefix_spares_other_users() {
        let cache = InMemoryCacheStore::new();
        let ttl = Duration::from_secs(300);
        cache.set_raw("recs:7:aaaa", "[]", ttl).await.unwrap();
        cache.set_raw("recs:7:bbbb", "[]", ttl).await.unwrap();
        cache.set_raw("recs:8:cccc", "[]", ttl).await.unwrap();
        cache.set_raw("recs:71:dddd", "[]", ttl).await.unwrap();

        let deleted = cache.delete_prefix("recs:7:").await.unwrap();
        assert_eq!(deleted, 2);
        assert!(cache.get_raw("recs:7:aaaa").await.unwrap().is_none());
        assert!(cache.get_raw("recs:7:bbbb").await.unwrap().is_none());
        assert!(cache.get_raw("recs:8:cccc").await.unwrap().is_some());
        // Substring collisions must not be swept (user 71 vs user 7)
        assert!(cache.get_raw("recs:71:dddd").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_single_key() {
        let cache = InMemoryCacheStore::new();
        cache
            .set_raw("user:features:7", "{}", Duration::from_secs(3600))
            .await
            .unwrap();
        assert!(cache.delete("user:features:7").await.unwrap());
        assert!(!cache.delete("user:features:7").await.unwrap());
    }
}
