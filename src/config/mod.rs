//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CacheBackend, CacheSettings, LogFormat, LoggingConfig, MetricsConfig,
    PaginationConfig, ServerConfig, StorageBackend, StorageSettings,
};
