//! Author request and response bodies

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::course::CourseForCreation;
use super::paging::PageParameters;
use crate::domain::author::{Author, AuthorQuery};
use crate::domain::pagination::PaginationFilter;
use crate::infrastructure::author::CreateAuthorRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub main_category: String,
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id().to_string(),
            name: author.full_name(),
            age: author.age(),
            main_category: author.main_category().to_string(),
        }
    }
}

/// Body of `POST /api/authors`, optionally with the author's first courses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorForCreation {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<FixedOffset>,
    pub main_category: String,
    #[serde(default)]
    pub courses: Vec<CourseForCreation>,
}

impl From<AuthorForCreation> for CreateAuthorRequest {
    fn from(body: AuthorForCreation) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            date_of_birth: body.date_of_birth,
            main_category: body.main_category,
            courses: body.courses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Query parameters of `GET /api/authors`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsResourceParameters {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
}

impl AuthorsResourceParameters {
    pub fn page(&self, default: PaginationFilter) -> PaginationFilter {
        PageParameters {
            page_number: self.page_number,
            page_size: self.page_size,
        }
        .filter(default)
    }

    /// Repository query for the resolved page
    pub fn to_query(&self, page: PaginationFilter) -> AuthorQuery {
        let mut query = AuthorQuery::new().with_pagination(page);

        if let Some(category) = &self.main_category {
            query = query.with_main_category(category.as_str());
        }

        if let Some(search) = &self.search_query {
            query = query.with_search_query(search.as_str());
        }

        query
    }
}
