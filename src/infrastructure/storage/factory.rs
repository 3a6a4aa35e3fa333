//! Storage factory for runtime storage selection

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::config::{StorageBackend, StorageSettings};
use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Creates entity stores on the configured backend
///
/// The PostgreSQL backend opens one pool when the factory is built and
/// shares it between every table.
#[derive(Debug, Clone)]
pub enum StorageFactory {
    InMemory,
    Postgres(PgPool),
}

impl StorageFactory {
    pub async fn from_settings(settings: &StorageSettings) -> Result<Self, DomainError> {
        match settings.backend {
            StorageBackend::InMemory => {
                info!("Using in-memory storage");
                Ok(Self::InMemory)
            }
            StorageBackend::Postgres => {
                info!("Connecting to PostgreSQL...");

                let pool = PostgresConfig::new(settings.database_url.clone())
                    .with_max_connections(settings.max_connections)
                    .connect()
                    .await?;

                info!("PostgreSQL connection established");
                Ok(Self::Postgres(pool))
            }
        }
    }

    /// Creates a store for one entity type, creating its table when needed
    pub async fn create<E>(&self, table_name: &str) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match self {
            Self::InMemory => Ok(Arc::new(InMemoryStorage::<E>::new())),
            Self::Postgres(pool) => {
                let storage = PostgresStorage::<E>::new(pool.clone(), table_name);
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::fixtures::Note;

    #[tokio::test]
    async fn test_in_memory_factory() {
        let factory = StorageFactory::from_settings(&StorageSettings::default())
            .await
            .unwrap();

        let storage = factory.create::<Note>("notes").await.unwrap();
        storage.create(Note::new("1", "alice", "a")).await.unwrap();

        assert_eq!(storage.list_by_parent("alice").await.unwrap().len(), 1);
    }
}
