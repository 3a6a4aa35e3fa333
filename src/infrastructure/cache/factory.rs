//! Cache factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::config::{CacheBackend, CacheSettings};
use crate::domain::cache::Cache;
use crate::domain::DomainError;

use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::redis::{RedisCache, RedisCacheConfig};

/// Factory for creating cache instances
#[derive(Debug, Default)]
pub struct CacheFactory;

impl CacheFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates the cache backend selected by the settings
    pub async fn create(&self, settings: &CacheSettings) -> Result<Arc<dyn Cache>, DomainError> {
        match settings.backend {
            CacheBackend::InMemory => {
                info!(max_capacity = settings.max_capacity, "Using in-memory response cache");

                let config = InMemoryCacheConfig::default().with_max_capacity(settings.max_capacity);
                Ok(Arc::new(InMemoryCache::with_config(config)))
            }
            CacheBackend::Redis => {
                if settings.redis_url.trim().is_empty() {
                    return Err(DomainError::configuration(
                        "cache.redis_url is required for the redis backend",
                    ));
                }

                info!(url = %settings.redis_url, "Using Redis response cache");

                let mut config = RedisCacheConfig::new(settings.redis_url.clone())
                    .with_connection_timeout(settings.connection_timeout());

                if let Some(prefix) = &settings.key_prefix {
                    config = config.with_key_prefix(prefix.clone());
                }

                Ok(Arc::new(RedisCache::new(config).await?))
            }
        }
    }
}
