//! Course entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_description, validate_title, CourseValidationError};
use crate::domain::author::AuthorId;
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Course identifier - a hyphenated lowercase UUID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(String);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(value)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not a valid course id", value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for CourseId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CourseId> for String {
    fn from(id: CourseId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CourseId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Course entity, always owned by one author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    author_id: AuthorId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Course {
    /// Create a new course
    pub fn new(
        id: CourseId,
        author_id: AuthorId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, CourseValidationError> {
        let title = title.into();

        validate_title(&title)?;
        validate_description(&title, description.as_deref())?;

        Ok(Self {
            id,
            author_id,
            title,
            description,
        })
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces title and description together, keeping the old values on error
    pub fn revise(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), CourseValidationError> {
        let title = title.into();

        validate_title(&title)?;
        validate_description(&title, description.as_deref())?;

        self.title = title;
        self.description = description;
        Ok(())
    }
}

impl StorageEntity for Course {
    type Key = CourseId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn parent_key(&self) -> Option<&str> {
        Some(self.author_id.as_str())
    }
}
