//! Storage-backed course repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::author::AuthorId;
use crate::domain::course::{Course, CourseId, CourseQuery, CourseRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of CourseRepository
#[derive(Debug)]
pub struct StorageCourseRepository {
    storage: Arc<dyn Storage<Course>>,
}

impl StorageCourseRepository {
    pub fn new(storage: Arc<dyn Storage<Course>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CourseRepository for StorageCourseRepository {
    async fn get(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<Option<Course>, DomainError> {
        Ok(self
            .storage
            .get(course_id)
            .await?
            .filter(|course| course.author_id() == author_id))
    }

    async fn list(&self, query: &CourseQuery) -> Result<Vec<Course>, DomainError> {
        let mut courses = self.storage.list_by_parent(query.author_id.as_str()).await?;

        courses.sort_by(|a, b| a.title().cmp(b.title()));

        Ok(match query.pagination {
            Some(filter) => filter.slice(courses),
            None => courses,
        })
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        if self.storage.exists(course.id()).await? {
            return Err(DomainError::conflict(format!(
                "Course '{}' already exists",
                course.id()
            )));
        }

        self.storage.create(course).await
    }

    async fn update(&self, course: Course) -> Result<Course, DomainError> {
        self.storage.update(course).await
    }

    async fn delete(&self, course_id: &CourseId) -> Result<bool, DomainError> {
        self.storage.delete(course_id).await
    }

    async fn delete_for_author(&self, author_id: &AuthorId) -> Result<usize, DomainError> {
        self.storage.delete_by_parent(author_id.as_str()).await
    }
}
