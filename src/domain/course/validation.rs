//! Course validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during course validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CourseValidationError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title cannot exceed {0} characters")]
    TitleTooLong(usize),

    #[error("Description cannot exceed {0} characters")]
    DescriptionTooLong(usize),

    #[error("The provided description should be different from the title")]
    DescriptionSameAsTitle,
}

impl CourseValidationError {
    /// Name of the offending request field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong(_) => "title",
            Self::DescriptionTooLong(_) | Self::DescriptionSameAsTitle => "description",
        }
    }
}

impl From<CourseValidationError> for DomainError {
    fn from(error: CourseValidationError) -> Self {
        DomainError::invalid_field(error.field(), error.to_string())
    }
}

const MAX_TITLE_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 1500;

pub fn validate_title(title: &str) -> Result<(), CourseValidationError> {
    if title.trim().is_empty() {
        return Err(CourseValidationError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CourseValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    Ok(())
}

pub fn validate_description(
    title: &str,
    description: Option<&str>,
) -> Result<(), CourseValidationError> {
    let Some(description) = description else {
        return Ok(());
    };

    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CourseValidationError::DescriptionTooLong(
            MAX_DESCRIPTION_LENGTH,
        ));
    }

    if description == title {
        return Err(CourseValidationError::DescriptionSameAsTitle);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_course_fields() {
        assert!(validate_title("Commandeering a Ship Without Getting Caught").is_ok());
        assert!(validate_description("Title", Some("Something else")).is_ok());
        assert!(validate_description("Title", None).is_ok());
    }

    #[test]
    fn test_title_rules() {
        assert_eq!(validate_title(" "), Err(CourseValidationError::EmptyTitle));
        assert_eq!(
            validate_title(&"t".repeat(101)),
            Err(CourseValidationError::TitleTooLong(100))
        );
    }

    #[test]
    fn test_description_rules() {
        assert_eq!(
            validate_description("Same", Some("Same")),
            Err(CourseValidationError::DescriptionSameAsTitle)
        );
        assert_eq!(
            validate_description("Title", Some(&"d".repeat(1501))),
            Err(CourseValidationError::DescriptionTooLong(1500))
        );
    }
}
