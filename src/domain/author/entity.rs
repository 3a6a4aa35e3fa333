//! Author entity and related types

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_first_name, validate_last_name, validate_main_category, AuthorValidationError,
};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Author identifier - a hyphenated lowercase UUID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorId(String);

impl AuthorId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses an identifier from its textual form
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(value)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not a valid author id", value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for AuthorId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AuthorId> for String {
    fn from(id: AuthorId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for AuthorId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    first_name: String,
    last_name: String,
    date_of_birth: DateTime<FixedOffset>,
    main_category: String,
}

impl Author {
    /// Create a new author
    pub fn new(
        id: AuthorId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: DateTime<FixedOffset>,
        main_category: impl Into<String>,
    ) -> Result<Self, AuthorValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let main_category = main_category.into();

        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;
        validate_main_category(&main_category)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            main_category,
        })
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> DateTime<FixedOffset> {
        self.date_of_birth
    }

    pub fn main_category(&self) -> &str {
        &self.main_category
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole years lived as of `today`
    ///
    /// The birth date is taken in its own offset.
    pub fn age_at(&self, today: NaiveDate) -> i32 {
        let born = self.date_of_birth.date_naive();
        let mut age = today.year() - born.year();

        if (today.month(), today.day()) < (born.month(), born.day()) {
            age -= 1;
        }

        age
    }

    /// Whole years lived as of the current UTC date
    pub fn age(&self) -> i32 {
        self.age_at(Utc::now().date_naive())
    }
}

impl StorageEntity for Author {
    type Key = AuthorId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
