//! Key-value cache in front of the transaction store.
//!
//! The cache is a pass-through TTL store: entries expire on their own and
//! nothing evicts them otherwise. Three backends implement [`Cache`]:
//!
//! - [`RedisCache`]: shared Redis instance, used in deployments
//! - [`MemoryCache`]: in-process map, for single-instance runs
//! - [`NoCache`]: caching switched off, every lookup misses

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::CacheBackend;

/// Errors raised by cache backends.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Redis command or connection failed.
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A cached value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal get / set-with-expiry / delete contract every backend provides.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetch a value, `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value that expires after `ttl`.
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Remove a value. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

impl dyn Cache {
    /// Fetch and decode a JSON value.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and store it with an expiry.
    pub async fn set_json<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.set_ex(key, &raw, ttl).await
    }
}

/// Build the cache selected by configuration.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and the URL is invalid
/// or the server cannot be reached.
pub async fn connect(backend: CacheBackend, redis_url: &str) -> Result<Arc<dyn Cache>, CacheError> {
    let cache: Arc<dyn Cache> = match backend {
        CacheBackend::Redis => Arc::new(RedisCache::connect(redis_url).await?),
        CacheBackend::Memory => Arc::new(MemoryCache::new()),
        CacheBackend::Disabled => Arc::new(NoCache),
    };
    Ok(cache)
}

/// Redis-backed cache.
///
/// `ConnectionManager` multiplexes one connection and reconnects on its
/// own, so it is cloned per command rather than pooled.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    /// Connect to Redis at `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection.clone();
        Ok(connection.get::<_, Option<String>>(key).await?)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        connection
            .set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        connection.del::<_, ()>(key).await?;
        Ok(())
    }
}

struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

/// In-process cache with per-entry deadlines.
///
/// Expired entries are dropped when read and swept on every write. Deadlines use the tokio
/// clock, so tests can advance time with a paused runtime.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, MemoryEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let now = Instant::now();
        let entry = MemoryEntry {
            value: value.to_string(),
            expires_at: now + ttl,
        };

        let mut entries = self.entries.lock().await;
        entries.retain(|_, existing| existing.expires_at > now);
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// Cache that never stores anything.
pub struct NoCache;

#[async_trait]
impl Cache for NoCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set_ex(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }
}
