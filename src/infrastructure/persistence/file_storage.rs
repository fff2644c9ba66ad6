//! JSON file storage backend.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use super::memory_storage::{ObjectMap, check_keys};
use super::pending::{PendingChange, PendingChanges};
use crate::domain::entities::{Object, ObjectKind, object_key};
use crate::domain::repositories::{Storage, StorageError};

/// Modification time and size of the storage file, `None` when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

/// Last observed contents of the storage file.
#[derive(Debug, Default)]
struct DiskCache {
    stamp: Option<FileStamp>,
    objects: ObjectMap,
}

/// Storage persisted as a single JSON document.
///
/// The document maps `<Class>.<id>` keys to serialized objects. Other
/// processes (the `admin` tool, another server) may write the same file:
/// reads reload it whenever its modification stamp changes, and
/// [`Storage::save`] re-reads it and applies only this instance's staged
/// changes before rewriting it through a temporary file and a rename.
pub struct FileStorage {
    path: PathBuf,
    disk: RwLock<DiskCache>,
    pending: Mutex<PendingChanges>,
}

impl FileStorage {
    /// Opens the storage file, treating a missing or empty file as empty storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be read,
    /// [`StorageError::Serialization`] if it is not a valid object map and
    /// [`StorageError::KeyMismatch`] if a key disagrees with its object.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let stamp = stamp(&path).await?;
        let objects = load(&path).await?;
        tracing::debug!(path = %path.display(), count = objects.len(), "storage file loaded");

        Ok(Self {
            path,
            disk: RwLock::new(DiskCache { stamp, objects }),
            pending: Mutex::new(PendingChanges::default()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reloads the cached document if the file changed since it was read.
    async fn refresh(&self) -> Result<(), StorageError> {
        let current = stamp(&self.path).await?;
        if self.disk.read().await.stamp == current {
            return Ok(());
        }

        let objects = load(&self.path).await?;
        tracing::debug!(path = %self.path.display(), count = objects.len(), "storage file reloaded");
        *self.disk.write().await = DiskCache {
            stamp: current,
            objects,
        };
        Ok(())
    }

    /// Per-process temporary file next to the storage file.
    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{}.tmp", std::process::id()));
        PathBuf::from(name)
    }
}

async fn stamp(path: &Path) -> Result<Option<FileStamp>, StorageError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(Some(FileStamp {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn load(path: &Path) -> Result<ObjectMap, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ObjectMap::new()),
        Err(e) => return Err(e.into()),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ObjectMap::new());
    }

    let objects: ObjectMap = serde_json::from_slice(&bytes)?;
    check_keys(&objects)?;
    Ok(objects)
}

#[async_trait]
impl Storage for FileStorage {
    async fn all(&self, kind: ObjectKind) -> Result<HashMap<String, Object>, StorageError> {
        self.refresh().await?;

        let mut objects: HashMap<String, Object> = self
            .disk
            .read()
            .await
            .objects
            .values()
            .filter(|object| object.kind() == kind)
            .map(|object| (object.id().to_string(), object.clone()))
            .collect();

        self.pending.lock().await.overlay(kind, &mut objects);
        Ok(objects)
    }

    async fn get(&self, kind: ObjectKind, id: &str) -> Result<Option<Object>, StorageError> {
        match self.pending.lock().await.get(kind, id) {
            Some(PendingChange::Upsert(object)) => return Ok(Some(object.clone())),
            Some(PendingChange::Delete { .. }) => return Ok(None),
            None => {}
        }

        self.refresh().await?;
        Ok(self.disk.read().await.objects.get(&object_key(kind, id)).cloned())
    }

    async fn insert(&self, object: Object) -> Result<(), StorageError> {
        self.pending.lock().await.upsert(object);
        Ok(())
    }

    async fn delete(&self, object: &Object) -> Result<(), StorageError> {
        self.pending.lock().await.delete(object);
        Ok(())
    }

    async fn save(&self) -> Result<(), StorageError> {
        let mut pending = self.pending.lock().await;
        if pending.is_empty() {
            return Ok(());
        }

        let mut objects = load(&self.path).await?;
        pending.apply(&mut objects);

        let sorted: BTreeMap<&String, &Object> = objects.iter().collect();
        let json = serde_json::to_vec_pretty(&sorted)?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        let current = stamp(&self.path).await?;
        tracing::debug!(
            path = %self.path.display(),
            changes = pending.len(),
            count = objects.len(),
            "storage file saved"
        );
        *self.disk.write().await = DiskCache {
            stamp: current,
            objects,
        };
        pending.clear();

        Ok(())
    }

    async fn check(&self) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        tokio::fs::metadata(dir).await?;
        Ok(())
    }
}
