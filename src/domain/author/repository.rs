//! Author repository trait

use async_trait::async_trait;

use super::entity::{Author, AuthorId};
use crate::domain::pagination::PaginationFilter;
use crate::domain::DomainError;

/// Query parameters for listing authors
#[derive(Debug, Clone, Default)]
pub struct AuthorQuery {
    /// Exact main category match
    pub main_category: Option<String>,
    /// Substring match on main category, first name or last name
    pub search_query: Option<String>,
    /// Page to return, all matches when absent
    pub pagination: Option<PaginationFilter>,
}

impl AuthorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank values are ignored; others are trimmed
    pub fn with_main_category(mut self, category: impl Into<String>) -> Self {
        self.main_category = non_blank(category.into());
        self
    }

    /// Blank values are ignored; others are trimmed
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = non_blank(query.into());
        self
    }

    pub fn with_pagination(mut self, filter: PaginationFilter) -> Self {
        self.pagination = Some(filter);
        self
    }

    /// Returns true if the author passes the category and search filters
    pub fn matches(&self, author: &Author) -> bool {
        if let Some(ref category) = self.main_category {
            if author.main_category() != category {
                return false;
            }
        }

        if let Some(ref search) = self.search_query {
            return author.main_category().contains(search.as_str())
                || author.first_name().contains(search.as_str())
                || author.last_name().contains(search.as_str());
        }

        true
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Repository for managing authors
#[async_trait]
pub trait AuthorRepository: Send + Sync + std::fmt::Debug {
    /// Get an author by ID
    async fn get(&self, id: &AuthorId) -> Result<Option<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, author: Author) -> Result<Author, DomainError>;

    /// Delete an author by ID
    async fn delete(&self, id: &AuthorId) -> Result<bool, DomainError>;

    /// List authors matching the query, ordered by last then first name
    async fn list(&self, query: &AuthorQuery) -> Result<Vec<Author>, DomainError>;

    /// Check if an author exists
    async fn exists(&self, id: &AuthorId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn author(first: &str, last: &str, category: &str) -> Author {
        Author::new(
            AuthorId::new(),
            first,
            last,
            DateTime::parse_from_rfc3339("1970-01-01T00:00:00+00:00").unwrap(),
            category,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let query = AuthorQuery::new()
            .with_main_category("  ")
            .with_search_query("");

        assert!(query.main_category.is_none());
        assert!(query.search_query.is_none());
    }

    #[test]
    fn test_main_category_is_trimmed_exact_match() {
        let query = AuthorQuery::new().with_main_category(" Rum ");

        assert!(query.matches(&author("Nancy", "Rye", "Rum")));
        assert!(!query.matches(&author("Nancy", "Rye", "Rum and Ships")));
    }

    #[test]
    fn test_search_query_matches_any_field() {
        let query = AuthorQuery::new().with_search_query("Gri");

        assert!(query.matches(&author("Berry", "Griffin", "Ships")));
        assert!(query.matches(&author("Grime", "Eldritch", "Maps")));
        assert!(query.matches(&author("Arnold", "Bunch", "Grit")));
        assert!(!query.matches(&author("Nancy", "Rye", "Rum")));
    }

    #[test]
    fn test_filters_combine() {
        let query = AuthorQuery::new()
            .with_main_category("Ships")
            .with_search_query("Berry");

        assert!(query.matches(&author("Berry", "Griffin", "Ships")));
        assert!(!query.matches(&author("Berry", "Griffin", "Maps")));
    }
}
