//! Course repository trait

use async_trait::async_trait;

use super::entity::{Course, CourseId};
use crate::domain::author::AuthorId;
use crate::domain::pagination::PaginationFilter;
use crate::domain::DomainError;

/// Query parameters for listing one author's courses
#[derive(Debug, Clone)]
pub struct CourseQuery {
    pub author_id: AuthorId,
    /// Page to return, all courses when absent
    pub pagination: Option<PaginationFilter>,
}

impl CourseQuery {
    pub fn for_author(author_id: AuthorId) -> Self {
        Self {
            author_id,
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, filter: PaginationFilter) -> Self {
        self.pagination = Some(filter);
        self
    }
}

/// Repository for managing courses
#[async_trait]
pub trait CourseRepository: Send + Sync + std::fmt::Debug {
    /// Get an author's course by ID
    async fn get(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<Option<Course>, DomainError>;

    /// List courses matching the query, ordered by title
    async fn list(&self, query: &CourseQuery) -> Result<Vec<Course>, DomainError>;

    /// Create a new course
    async fn create(&self, course: Course) -> Result<Course, DomainError>;

    /// Update an existing course
    async fn update(&self, course: Course) -> Result<Course, DomainError>;

    /// Delete a course by ID
    async fn delete(&self, course_id: &CourseId) -> Result<bool, DomainError>;

    /// Delete every course of an author, returns the count removed
    async fn delete_for_author(&self, author_id: &AuthorId) -> Result<usize, DomainError>;
}
