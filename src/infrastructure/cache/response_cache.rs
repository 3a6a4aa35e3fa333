//! Response cache service

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::domain::cache::{Cache, CacheExt, ResponseCacheKey};
use crate::domain::DomainError;

/// Stores serialized response payloads under request-derived keys
#[derive(Debug, Clone)]
pub struct ResponseCacheService {
    cache: Arc<dyn Cache>,
}

impl ResponseCacheService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Returns the stored payload, `None` when absent or expired
    pub async fn get_cached_response(
        &self,
        key: &ResponseCacheKey,
    ) -> Result<Option<String>, DomainError> {
        let cached = self.cache.get_raw(key.as_str()).await?;

        debug!(key = %key, hit = cached.is_some(), "Response cache lookup");
        Ok(cached)
    }

    /// Serializes and stores a payload, replacing any previous entry
    pub async fn cache_response<T>(
        &self,
        key: &ResponseCacheKey,
        response: &T,
        ttl: Duration,
    ) -> Result<(), DomainError>
    where
        T: Serialize + Send + Sync + ?Sized,
    {
        self.cache.set(key.as_str(), response, ttl).await?;

        debug!(key = %key, ttl_secs = ttl.as_secs(), "Response cached");
        Ok(())
    }

    /// Round-trips the backing store for readiness checks
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.cache.exists("health:ping").await.map(|_| ())
    }
}
