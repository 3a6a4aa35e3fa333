//! Course request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::domain::course::Course;
use crate::infrastructure::course::CourseFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub author_id: String,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            title: course.title().to_string(),
            description: course.description().map(str::to_string),
            author_id: course.author_id().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForCreation {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CourseForCreation> for CourseFields {
    fn from(body: CourseForCreation) -> Self {
        Self {
            title: body.title,
            description: body.description,
        }
    }
}

/// Full replacement body, also the document a JSON Patch is applied to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CourseForUpdate {
    /// Patchable document with every member present
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();
        document.insert("title".to_string(), self.title.clone().into());
        document.insert("description".to_string(), self.description.clone().into());
        document
    }

    /// Reads a patched document back, rejecting members of the wrong type
    pub fn from_document(document: Map<String, Value>) -> Result<Self, ApiError> {
        serde_json::from_value(Value::Object(document)).map_err(|e| {
            ApiError::unprocessable(format!("Patched course is invalid: {}", e))
                .with_code("invalid_patch")
        })
    }
}

impl From<&Course> for CourseForUpdate {
    fn from(course: &Course) -> Self {
        Self {
            title: Some(course.title().to_string()),
            description: course.description().map(str::to_string),
        }
    }
}

impl From<CourseForUpdate> for CourseFields {
    fn from(body: CourseForUpdate) -> Self {
        Self {
            title: body.title.unwrap_or_default(),
            description: body.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::AuthorId;
    use crate::domain::course::CourseId;

    #[test]
    fn test_course_dto_shape() {
        let course = Course::new(
            CourseId::new(),
            AuthorId::new(),
            "Commandeering a Ship Without Getting Caught",
            Some("Commandeering a ship in rough waters isn't easy.".to_string()),
        )
        .unwrap();

        let json = serde_json::to_value(CourseDto::from(&course)).unwrap();

        assert_eq!(json["authorId"], course.author_id().to_string());
        assert_eq!(json["title"], "Commandeering a Ship Without Getting Caught");
    }

    #[test]
    fn test_document_round_trip_keeps_null_members() {
        let update = CourseForUpdate {
            title: Some("Title".to_string()),
            description: None,
        };

        let document = update.to_document();
        assert_eq!(document.len(), 2);
        assert_eq!(document["description"], Value::Null);

        let back = CourseForUpdate::from_document(document).unwrap();
        assert_eq!(CourseFields::from(back).title, "Title");
    }

    #[test]
    fn test_document_with_wrong_type_is_rejected() {
        let mut document = CourseForUpdate::default().to_document();
        document.insert("title".to_string(), Value::from(42));

        let err = CourseForUpdate::from_document(document).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_missing_title_becomes_empty() {
        let fields = CourseFields::from(CourseForUpdate::default());
        assert!(fields.title.is_empty());
    }
}
