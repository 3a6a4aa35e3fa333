//! Course service

use std::sync::Arc;

use tracing::info;

use crate::domain::author::{AuthorId, AuthorRepository};
use crate::domain::course::{Course, CourseId, CourseQuery, CourseRepository};
use crate::domain::pagination::PaginationFilter;
use crate::domain::DomainError;

/// Writable course fields, used for create and full replacement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFields {
    pub title: String,
    pub description: Option<String>,
}

impl From<&Course> for CourseFields {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title().to_string(),
            description: course.description().map(str::to_string),
        }
    }
}

/// Result of a create-or-replace
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    Created(Course),
    Updated(Course),
}

/// Course service; every operation is scoped to an existing author
#[derive(Debug, Clone)]
pub struct CourseService {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    async fn existing_author(&self, author_id: &str) -> Result<AuthorId, DomainError> {
        let id = AuthorId::parse(author_id)?;

        if !self.authors.exists(&id).await? {
            return Err(DomainError::not_found(format!(
                "Author '{}' not found",
                author_id
            )));
        }

        Ok(id)
    }

    /// List an author's courses ordered by title
    pub async fn list(
        &self,
        author_id: &str,
        pagination: Option<PaginationFilter>,
    ) -> Result<Vec<Course>, DomainError> {
        let author_id = self.existing_author(author_id).await?;
        let mut query = CourseQuery::for_author(author_id);

        if let Some(filter) = pagination {
            query = query.with_pagination(filter);
        }

        self.courses.list(&query).await
    }

    /// Get one of an author's courses
    pub async fn get(&self, author_id: &str, course_id: &str) -> Result<Option<Course>, DomainError> {
        let author_id = self.existing_author(author_id).await?;
        let course_id = CourseId::parse(course_id)?;

        self.courses.get(&author_id, &course_id).await
    }

    /// Create a course for an author
    pub async fn create(&self, author_id: &str, fields: CourseFields) -> Result<Course, DomainError> {
        let author_id = self.existing_author(author_id).await?;

        info!(author_id = %author_id, title = %fields.title, "Creating course");

        let course = Course::new(CourseId::new(), author_id, fields.title, fields.description)?;
        self.courses.create(course).await
    }

    /// Replace a course, creating it under the given id when absent
    pub async fn upsert(
        &self,
        author_id: &str,
        course_id: &str,
        fields: CourseFields,
    ) -> Result<Upserted, DomainError> {
        let author_id = self.existing_author(author_id).await?;
        let course_id = CourseId::parse(course_id)?;

        match self.courses.get(&author_id, &course_id).await? {
            Some(mut course) => {
                info!(course_id = %course_id, "Updating course");

                course.revise(fields.title, fields.description)?;
                self.courses.update(course).await.map(Upserted::Updated)
            }
            None => {
                info!(course_id = %course_id, "Creating course by upsert");

                let course = Course::new(course_id, author_id, fields.title, fields.description)?;
                self.courses.create(course).await.map(Upserted::Created)
            }
        }
    }

    /// Delete one of an author's courses
    pub async fn delete(&self, author_id: &str, course_id: &str) -> Result<bool, DomainError> {
        let author_id = self.existing_author(author_id).await?;
        let course_id = CourseId::parse(course_id)?;

        if self.courses.get(&author_id, &course_id).await?.is_none() {
            return Ok(false);
        }

        info!(course_id = %course_id, "Deleting course");
        self.courses.delete(&course_id).await
    }
}
