//! In-process storage backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Object, ObjectKind, object_key};
use crate::domain::repositories::{Storage, StorageError};

/// Map of storage key (`<Class>.<id>`) to object.
pub type ObjectMap = HashMap<String, Object>;

/// Storage kept entirely in memory.
///
/// Changes are visible immediately and `save` has nothing to flush.
#[derive(Default)]
pub struct MemoryStorage {
    objects: RwLock<ObjectMap>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `objects`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::KeyMismatch`] if a key does not match the
    /// class and id of its object.
    pub fn from_objects(objects: ObjectMap) -> Result<Self, StorageError> {
        check_keys(&objects)?;

        Ok(Self {
            objects: RwLock::new(objects),
        })
    }
}

/// Fails with [`StorageError::KeyMismatch`] on the first key that is not the
/// `<Class>.<id>` of its object.
pub fn check_keys(objects: &ObjectMap) -> Result<(), StorageError> {
    match objects.iter().find(|(key, object)| **key != object.key()) {
        Some((key, _)) => Err(StorageError::KeyMismatch { key: key.clone() }),
        None => Ok(()),
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn all(&self, kind: ObjectKind) -> Result<HashMap<String, Object>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects
            .values()
            .filter(|object| object.kind() == kind)
            .map(|object| (object.id().to_string(), object.clone()))
            .collect())
    }

    async fn get(&self, kind: ObjectKind, id: &str) -> Result<Option<Object>, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects.get(&object_key(kind, id)).cloned())
    }

    async fn insert(&self, object: Object) -> Result<(), StorageError> {
        self.objects.write().await.insert(object.key(), object);
        Ok(())
    }

    async fn delete(&self, object: &Object) -> Result<(), StorageError> {
        self.objects.write().await.remove(&object.key());
        Ok(())
    }

    async fn save(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn count(&self, kind: ObjectKind) -> Result<usize, StorageError> {
        let objects = self.objects.read().await;
        Ok(objects.values().filter(|object| object.kind() == kind).count())
    }
}
