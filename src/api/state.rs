//! Application state for shared services

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::pagination::PaginationFilter;
use crate::infrastructure::author::AuthorService;
use crate::infrastructure::cache::ResponseCacheService;
use crate::infrastructure::course::CourseService;

/// HTTP-facing settings derived from configuration
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Overrides request headers when building absolute links
    pub public_base_url: Option<String>,
    /// Page served when a list request has no paging parameters
    pub default_page: PaginationFilter,
    /// Lifetime of cached course responses
    pub cache_ttl: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ApiSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            public_base_url: config
                .server
                .public_base_url
                .as_ref()
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            default_page: PaginationFilter::new(
                config.pagination.default_page_number,
                config.pagination.default_page_size,
            ),
            cache_ttl: config.cache.ttl(),
        }
    }
}

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub course_service: Arc<CourseService>,
    /// Absent when response caching is disabled
    pub response_cache: Option<Arc<ResponseCacheService>>,
    pub settings: ApiSettings,
}

impl AppState {
    pub fn new(author_service: Arc<AuthorService>, course_service: Arc<CourseService>) -> Self {
        Self {
            author_service,
            course_service,
            response_cache: None,
            settings: ApiSettings::default(),
        }
    }

    pub fn with_response_cache(mut self, cache: Arc<ResponseCacheService>) -> Self {
        self.response_cache = Some(cache);
        self
    }

    pub fn with_settings(mut self, settings: ApiSettings) -> Self {
        self.settings = settings;
        self
    }
}
