//! Course Library API
//!
//! Authors and their courses over HTTP, with:
//! - Cache-aside response caching for course reads (in-memory or Redis)
//! - Paginated collection envelopes with sibling page links
//! - In-memory or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{ApiSettings, AppState};
use domain::author::{Author, AuthorRepository};
use domain::course::{Course, CourseRepository};
use infrastructure::{
    author::{AuthorService, StorageAuthorRepository},
    cache::{CacheFactory, ResponseCacheService},
    course::{CourseService, StorageCourseRepository},
    storage::StorageFactory,
};

/// Create application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = StorageFactory::from_settings(&config.storage).await?;

    let authors: Arc<dyn AuthorRepository> = Arc::new(StorageAuthorRepository::new(
        storage.create::<Author>("authors").await?,
    ));
    let courses: Arc<dyn CourseRepository> = Arc::new(StorageCourseRepository::new(
        storage.create::<Course>("courses").await?,
    ));

    let author_service = Arc::new(AuthorService::new(authors.clone(), courses.clone()));
    let course_service = Arc::new(CourseService::new(authors, courses));

    let mut state = AppState::new(author_service, course_service)
        .with_settings(ApiSettings::from_config(config));

    if config.cache.enabled {
        let cache = CacheFactory::new().create(&config.cache).await?;
        state = state.with_response_cache(Arc::new(ResponseCacheService::new(cache)));
    } else {
        info!("Response cache disabled");
    }

    Ok(state)
}
