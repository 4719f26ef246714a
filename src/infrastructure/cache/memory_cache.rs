//! Process-local cache backend for tests and single-instance development.

use super::backend::{CacheBackend, CacheResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    ttl_seconds: u64,
    expires_at: Instant,
}

/// In-memory [`CacheBackend`] with per-entry expiry.
///
/// Expired entries are dropped lazily on read. Not shared between
/// processes; use [`super::RedisCache`] in production.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (possibly expired) entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// TTL the entry under `key` was stored with.
    pub fn stored_ttl(&self, key: &str) -> Option<u64> {
        self.lock().get(key).map(|entry| entry.ttl_seconds)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        // A poisoned map only means a panicking writer; the data is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.lock();

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.lock().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl_seconds,
                expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }
}
