//! Fetch-or-compute cache service.

use super::backend::{CacheBackend, CacheError};
use super::cacheable::Cacheable;
use super::content_type::ContentType;
use super::redis_cache::{PoolSettings, RedisCache};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Default cache key namespace.
pub const DEFAULT_NAMESPACE: &str = "playbook";

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Backend connection string; caching is off when absent.
    pub backend_url: Option<String>,
    /// Forces caching off even when a backend is configured.
    pub disabled: bool,
    /// Prefix of every cache key.
    pub namespace: String,
    pub pool: PoolSettings,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend_url: None,
            disabled: false,
            namespace: DEFAULT_NAMESPACE.to_string(),
            pool: PoolSettings::default(),
        }
    }
}

impl CacheSettings {
    /// Caching is requested only with a backend URL and no disable flag.
    pub fn is_requested(&self) -> bool {
        self.backend_url.is_some() && !self.disabled
    }
}

/// Cache backend state reported by health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    Disabled,
    Healthy,
    Unavailable(String),
}

enum Lookup<T> {
    Hit(T),
    Miss,
    Bypass,
}

/// Caches the results of expensive computations under hashed keys.
///
/// The service is fail-open: when the backend is disabled, unreachable,
/// or errors on a call, the computation runs directly and its result is
/// returned uncached. Callers never see a cache error.
///
/// # Key Format
///
/// `<namespace>:<content_type>:<hex(sha256(logical_key))>`
pub struct CacheService {
    backend: Option<Arc<dyn CacheBackend>>,
    namespace: String,
}

impl CacheService {
    /// Creates a service that caches through `backend`.
    pub fn new(backend: Arc<dyn CacheBackend>, namespace: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            namespace: namespace.into(),
        }
    }

    /// Creates a service that always computes directly.
    pub fn disabled(namespace: impl Into<String>) -> Self {
        Self {
            backend: None,
            namespace: namespace.into(),
        }
    }

    /// Builds the service from startup settings.
    ///
    /// Connects to Redis when caching is requested. A failed connection or
    /// PING disables caching for the lifetime of the process.
    pub async fn from_settings(settings: &CacheSettings) -> Self {
        if settings.disabled {
            info!("Cache disabled (DISABLE_REDIS_CACHE)");
            return Self::disabled(&settings.namespace);
        }

        let Some(url) = &settings.backend_url else {
            info!("Cache disabled (no backend configured)");
            return Self::disabled(&settings.namespace);
        };

        match RedisCache::connect(url, settings.pool).await {
            Ok(redis) => {
                info!("Cache enabled (Redis)");
                Self::new(Arc::new(redis), &settings.namespace)
            }
            Err(e) => {
                warn!("Failed to connect to Redis: {}. Caching disabled.", e);
                Self::disabled(&settings.namespace)
            }
        }
    }

    /// Returns whether a backend is in use.
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Derives the backend key for a logical key and content type.
    pub fn cache_key(&self, logical_key: &str, content_type: ContentType) -> String {
        let digest = Sha256::digest(logical_key.as_bytes());
        format!(
            "{}:{}:{}",
            self.namespace,
            content_type.as_str(),
            hex::encode(digest)
        )
    }

    /// Returns the cached value for `logical_key`, or computes and stores it.
    ///
    /// `compute` runs at most once and never on a cache hit. Errors from
    /// `compute` are returned as-is and nothing is stored; neither are
    /// values for which [`Cacheable::is_cacheable`] is false.
    ///
    /// # Errors
    ///
    /// Only errors produced by `compute` itself.
    pub async fn fetch<T, E, F, Fut>(
        &self,
        logical_key: &str,
        content_type: ContentType,
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned + Cacheable,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let Some(backend) = &self.backend else {
            return compute().await;
        };

        let key = self.cache_key(logical_key, content_type);

        match lookup::<T>(backend.as_ref(), &key).await {
            Lookup::Hit(value) => {
                debug!("Cache HIT: {} ({})", logical_key, content_type);
                record_outcome(content_type, "hit");
                return Ok(value);
            }
            Lookup::Miss => {
                debug!("Cache MISS: {} ({})", logical_key, content_type);
                record_outcome(content_type, "miss");
            }
            Lookup::Bypass => {
                record_outcome(content_type, "bypass");
                return compute().await;
            }
        }

        let value = compute().await?;

        if value.is_cacheable() {
            if let Err(e) = store(backend.as_ref(), &key, &value, content_type.ttl_seconds()).await
            {
                warn!("Cache store failed for {}: {}", logical_key, e);
            }
        } else {
            debug!("Not caching empty result for {}", logical_key);
        }

        Ok(value)
    }

    /// Reports the backend state.
    pub async fn status(&self) -> CacheStatus {
        match &self.backend {
            None => CacheStatus::Disabled,
            Some(backend) => match backend.ping().await {
                Ok(()) => CacheStatus::Healthy,
                Err(e) => CacheStatus::Unavailable(e.to_string()),
            },
        }
    }
}

async fn lookup<T: DeserializeOwned>(backend: &dyn CacheBackend, key: &str) -> Lookup<T> {
    match backend.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Lookup::Hit(value),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                Lookup::Miss
            }
        },
        Ok(None) => Lookup::Miss,
        Err(e) => {
            warn!("Cache error: {}. Executing without cache.", e);
            Lookup::Bypass
        }
    }
}

async fn store<T: Serialize>(
    backend: &dyn CacheBackend,
    key: &str,
    value: &T,
    ttl_seconds: u64,
) -> Result<(), CacheError> {
    let raw = serde_json::to_string(value).map_err(|e| CacheError::Serialization(e.to_string()))?;
    backend.set_ex(key, &raw, ttl_seconds).await
}

fn record_outcome(content_type: ContentType, outcome: &'static str) {
    metrics::counter!(
        "cache_requests_total",
        "content_type" => content_type.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
