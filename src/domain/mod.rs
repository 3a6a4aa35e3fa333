//! Domain layer - Core business logic and entities

pub mod author;
pub mod cache;
pub mod course;
pub mod error;
pub mod pagination;
pub mod storage;

pub use author::{Author, AuthorId, AuthorQuery, AuthorRepository, AuthorValidationError};
pub use cache::{Cache, CacheExt, ResponseCacheKey};
pub use course::{Course, CourseId, CourseQuery, CourseRepository, CourseValidationError};
pub use error::DomainError;
pub use pagination::{create_paginated_response, PageUriBuilder, PagedResponse, PaginationFilter};
pub use storage::{Storage, StorageEntity, StorageKey};
