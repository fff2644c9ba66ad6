//! Storage trait: the persistence interface every service is written against.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{Object, ObjectKind};

/// Errors raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("stored object under key {key} does not match its key")]
    KeyMismatch { key: String },
}

/// Object storage holding every entity, indexed by class and id.
///
/// `insert` and `delete` stage changes; `save` makes every staged change
/// durable. Reads always observe staged changes, so a handler can insert an
/// object and read it back before saving.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStorage`] - process-local map
/// - [`crate::infrastructure::persistence::FileStorage`] - JSON file
/// - [`crate::infrastructure::persistence::PgStorage`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns every object of `kind`, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    async fn all(&self, kind: ObjectKind) -> Result<HashMap<String, Object>, StorageError>;

    /// Looks up a single object.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    async fn get(&self, kind: ObjectKind, id: &str) -> Result<Option<Object>, StorageError>;

    /// Stages `object` for persistence, replacing any object with the same
    /// class and id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the object cannot be staged.
    async fn insert(&self, object: Object) -> Result<(), StorageError>;

    /// Stages removal of `object`. Removing an absent object is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the removal cannot be staged.
    async fn delete(&self, object: &Object) -> Result<(), StorageError>;

    /// Persists every staged change.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the changes cannot be written.
    async fn save(&self) -> Result<(), StorageError>;

    /// Number of objects of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    async fn count(&self, kind: ObjectKind) -> Result<usize, StorageError> {
        Ok(self.all(kind).await?.len())
    }

    /// Verifies the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] describing why the backend is unavailable.
    async fn check(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
