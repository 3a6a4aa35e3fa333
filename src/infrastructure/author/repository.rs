//! Storage-backed author repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::author::{Author, AuthorId, AuthorQuery, AuthorRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of AuthorRepository
#[derive(Debug)]
pub struct StorageAuthorRepository {
    storage: Arc<dyn Storage<Author>>,
}

impl StorageAuthorRepository {
    pub fn new(storage: Arc<dyn Storage<Author>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl AuthorRepository for StorageAuthorRepository {
    async fn get(&self, id: &AuthorId) -> Result<Option<Author>, DomainError> {
        self.storage.get(id).await
    }

    async fn create(&self, author: Author) -> Result<Author, DomainError> {
        if self.storage.exists(author.id()).await? {
            return Err(DomainError::conflict(format!(
                "Author '{}' already exists",
                author.id()
            )));
        }

        self.storage.create(author).await
    }

    async fn delete(&self, id: &AuthorId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self, query: &AuthorQuery) -> Result<Vec<Author>, DomainError> {
        let mut authors: Vec<Author> = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|author| query.matches(author))
            .collect();

        authors.sort_by(|a, b| {
            a.last_name()
                .cmp(b.last_name())
                .then_with(|| a.first_name().cmp(b.first_name()))
        });

        Ok(match query.pagination {
            Some(filter) => filter.slice(authors),
            None => authors,
        })
    }

    async fn exists(&self, id: &AuthorId) -> Result<bool, DomainError> {
        self.storage.exists(id).await
    }
}
