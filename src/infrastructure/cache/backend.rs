//! Cache backend trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during cache backend operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Cache operation error: {0}")]
    Operation(String),

    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Minimal key-value store used by [`super::CacheService`].
///
/// Implementations must bound every call in time; a slow or unreachable
/// backend surfaces as [`CacheError::Timeout`] or [`CacheError::Connection`],
/// never as a hang.
///
/// # Implementations
///
/// - [`super::RedisCache`] - Redis-backed store with a bounded connection pool
/// - [`super::MemoryCache`] - In-process store with lazy expiry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Reads the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on hit
    /// - `Ok(None)` when the key is absent or expired
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Liveness check.
    async fn ping(&self) -> CacheResult<()>;
}
