//! Caching layer for upstream content.
//!
//! Provides [`CacheService`], a fail-open fetch-or-compute wrapper, on top
//! of the [`CacheBackend`] trait:
//! - [`RedisCache`] - Production Redis backend with a bounded connection pool
//! - [`MemoryCache`] - Process-local backend for tests and development
//! - [`ContentType`] - TTL policy per kind of cached content

mod backend;
mod cacheable;
mod content_type;
mod memory_cache;
mod redis_cache;
mod service;

pub use backend::{CacheBackend, CacheError, CacheResult};
pub use cacheable::Cacheable;
pub use content_type::ContentType;
pub use memory_cache::MemoryCache;
pub use redis_cache::{PoolSettings, RedisCache};
pub use service::{CacheService, CacheSettings, CacheStatus, DEFAULT_NAMESPACE};

#[cfg(test)]
pub use backend::MockCacheBackend;
