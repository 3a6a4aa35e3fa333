//! Author service

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, info};

use crate::domain::author::{Author, AuthorId, AuthorQuery, AuthorRepository};
use crate::domain::course::{Course, CourseId, CourseRepository};
use crate::domain::DomainError;
use crate::infrastructure::course::CourseFields;

/// Request for creating a new author, optionally with initial courses
#[derive(Debug, Clone)]
pub struct CreateAuthorRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<FixedOffset>,
    pub main_category: String,
    pub courses: Vec<CourseFields>,
}

/// Author service
#[derive(Debug, Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    /// List authors matching the query
    pub async fn list(&self, query: &AuthorQuery) -> Result<Vec<Author>, DomainError> {
        self.authors.list(query).await
    }

    /// Get an author by ID
    pub async fn get(&self, id: &str) -> Result<Option<Author>, DomainError> {
        let author_id = AuthorId::parse(id)?;
        self.authors.get(&author_id).await
    }

    /// Check if an author exists
    pub async fn exists(&self, id: &AuthorId) -> Result<bool, DomainError> {
        self.authors.exists(id).await
    }

    /// Create an author and its initial courses
    ///
    /// Every course is validated before anything is stored.
    pub async fn create(&self, request: CreateAuthorRequest) -> Result<Author, DomainError> {
        info!(
            first_name = %request.first_name,
            last_name = %request.last_name,
            courses = request.courses.len(),
            "Creating author"
        );

        let author = Author::new(
            AuthorId::new(),
            request.first_name,
            request.last_name,
            request.date_of_birth,
            request.main_category,
        )?;

        let courses = request
            .courses
            .into_iter()
            .map(|fields| {
                Course::new(
                    CourseId::new(),
                    author.id().clone(),
                    fields.title,
                    fields.description,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let author = self.authors.create(author).await?;

        for course in courses {
            self.courses.create(course).await?;
        }

        Ok(author)
    }

    /// Delete an author together with their courses
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id = %id, "Deleting author");

        let author_id = AuthorId::parse(id)?;

        if !self.authors.exists(&author_id).await? {
            return Ok(false);
        }

        let removed = self.courses.delete_for_author(&author_id).await?;
        debug!(id = %author_id, courses = removed, "Deleted author courses");

        self.authors.delete(&author_id).await
    }
}
