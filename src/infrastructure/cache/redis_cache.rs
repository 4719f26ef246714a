//! Redis-backed cache backend.

use super::backend::{CacheBackend, CacheError, CacheResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info};

/// Capacity and timeout of the backend connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Maximum number of concurrent backend operations.
    pub size: usize,
    /// Upper bound for acquiring a slot and for each operation.
    pub timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            size: 5,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Bounded set of command slots shared by all callers of one backend.
///
/// Waiting for a slot or for a reply longer than the pool timeout yields
/// [`CacheError::Timeout`].
#[derive(Clone)]
struct ConnectionSlots {
    semaphore: Arc<Semaphore>,
    timeout: Duration,
}

impl ConnectionSlots {
    fn new(pool: PoolSettings) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(pool.size)),
            timeout: pool.timeout,
        }
    }

    /// Runs `command` while holding a slot.
    async fn run<T, Fut>(&self, command: Fut) -> CacheResult<T>
    where
        Fut: Future<Output = RedisResult<T>>,
    {
        let _slot = timeout(self.timeout, self.semaphore.acquire())
            .await
            .map_err(|_| CacheError::Timeout(self.timeout))?
            .map_err(|_| CacheError::Connection("connection pool closed".to_string()))?;

        timeout(self.timeout, command)
            .await
            .map_err(|_| CacheError::Timeout(self.timeout))?
            .map_err(|e| CacheError::Operation(e.to_string()))
    }
}

/// Redis cache backend.
///
/// Commands are multiplexed over a `ConnectionManager` (which reconnects on
/// its own); a semaphore caps in-flight commands at [`PoolSettings::size`].
pub struct RedisCache {
    manager: ConnectionManager,
    slots: ConnectionSlots,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `pool` - pool capacity and timeouts
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid or the connection
    /// cannot be established, [`CacheError::Timeout`] if connecting or the PING
    /// takes longer than the pool timeout.
    pub async fn connect(redis_url: &str, pool: PoolSettings) -> CacheResult<Self> {
        info!("Connecting to Redis (pool size {})", pool.size);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = timeout(pool.timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| CacheError::Timeout(pool.timeout))?
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let cache = Self {
            manager,
            slots: ConnectionSlots::new(pool),
        };

        cache.ping().await?;
        info!("✓ Connected to Redis");

        Ok(cache)
    }

    /// Runs one command on a pooled connection, bounded by the pool timeout.
    async fn with_connection<T, F, Fut>(&self, command: F) -> CacheResult<T>
    where
        F: FnOnce(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        self.slots.run(command(self.manager.clone())).await
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.with_connection(|mut conn| async move { conn.get::<_, Option<String>>(key).await })
            .await
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        self.with_connection(|mut conn| async move {
            conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await
        })
        .await?;

        debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        self.with_connection(|mut conn| async move { conn.ping::<()>().await })
            .await
    }
}
