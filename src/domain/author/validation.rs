//! Author validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during author validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthorValidationError {
    #[error("First name is required")]
    EmptyFirstName,

    #[error("First name cannot exceed {0} characters")]
    FirstNameTooLong(usize),

    #[error("Last name is required")]
    EmptyLastName,

    #[error("Last name cannot exceed {0} characters")]
    LastNameTooLong(usize),

    #[error("Main category is required")]
    EmptyMainCategory,

    #[error("Main category cannot exceed {0} characters")]
    MainCategoryTooLong(usize),
}

impl AuthorValidationError {
    /// Name of the offending request field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyFirstName | Self::FirstNameTooLong(_) => "firstName",
            Self::EmptyLastName | Self::LastNameTooLong(_) => "lastName",
            Self::EmptyMainCategory | Self::MainCategoryTooLong(_) => "mainCategory",
        }
    }
}

impl From<AuthorValidationError> for DomainError {
    fn from(error: AuthorValidationError) -> Self {
        DomainError::invalid_field(error.field(), error.to_string())
    }
}

const MAX_NAME_LENGTH: usize = 50;
const MAX_MAIN_CATEGORY_LENGTH: usize = 50;

pub fn validate_first_name(name: &str) -> Result<(), AuthorValidationError> {
    if name.trim().is_empty() {
        return Err(AuthorValidationError::EmptyFirstName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AuthorValidationError::FirstNameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

pub fn validate_last_name(name: &str) -> Result<(), AuthorValidationError> {
    if name.trim().is_empty() {
        return Err(AuthorValidationError::EmptyLastName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AuthorValidationError::LastNameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

pub fn validate_main_category(category: &str) -> Result<(), AuthorValidationError> {
    if category.trim().is_empty() {
        return Err(AuthorValidationError::EmptyMainCategory);
    }

    if category.chars().count() > MAX_MAIN_CATEGORY_LENGTH {
        return Err(AuthorValidationError::MainCategoryTooLong(
            MAX_MAIN_CATEGORY_LENGTH,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_first_name("Berry").is_ok());
        assert!(validate_last_name("Griffin Beak Eldritch").is_ok());
        assert!(validate_main_category("Ships").is_ok());
    }

    #[test]
    fn test_blank_values_are_rejected() {
        assert_eq!(
            validate_first_name("   "),
            Err(AuthorValidationError::EmptyFirstName)
        );
        assert_eq!(validate_last_name(""), Err(AuthorValidationError::EmptyLastName));
        assert_eq!(
            validate_main_category(""),
            Err(AuthorValidationError::EmptyMainCategory)
        );
    }

    #[test]
    fn test_length_limits() {
        assert!(validate_first_name(&"a".repeat(50)).is_ok());
        assert_eq!(
            validate_first_name(&"a".repeat(51)),
            Err(AuthorValidationError::FirstNameTooLong(50))
        );
        assert_eq!(
            validate_main_category(&"é".repeat(51)),
            Err(AuthorValidationError::MainCategoryTooLong(50))
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(AuthorValidationError::EmptyLastName.field(), "lastName");
        assert_eq!(
            AuthorValidationError::MainCategoryTooLong(50).field(),
            "mainCategory"
        );
    }
}
