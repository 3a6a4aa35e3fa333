//! Storage entity traits and types

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be used as storage keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for storage backends that require string keys
    fn as_str(&self) -> &str;
}

/// Trait for types that can be stored
///
/// Entities owned by another record (a course by its author) report the
/// owner's key through [`StorageEntity::parent_key`] so backends can list
/// and delete them as a group.
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;

    /// Returns the key of the owning record, if any
    fn parent_key(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NoteKey(pub String);

    impl StorageKey for NoteKey {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    /// Small owned entity used by storage backend tests
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Note {
        pub id: NoteKey,
        pub owner: String,
        pub body: String,
    }

    impl Note {
        pub fn new(id: &str, owner: &str, body: &str) -> Self {
            Self {
                id: NoteKey(id.to_string()),
                owner: owner.to_string(),
                body: body.to_string(),
            }
        }
    }

    impl StorageEntity for Note {
        type Key = NoteKey;

        fn key(&self) -> &Self::Key {
            &self.id
        }

        fn parent_key(&self) -> Option<&str> {
            Some(&self.owner)
        }
    }
}
