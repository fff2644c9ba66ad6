//! PostgreSQL storage backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tokio::sync::Mutex;

use super::pending::{PendingChange, PendingChanges};
use crate::domain::entities::{Object, ObjectKind};
use crate::domain::repositories::{Storage, StorageError};

/// PostgreSQL storage over a single `objects` table.
///
/// Each object is stored as JSONB next to its class, id and timestamps.
/// Staged changes are kept in memory and written in one transaction on
/// [`Storage::save`]; reads overlay them on top of the table contents.
pub struct PgStorage {
    pool: Arc<PgPool>,
    pending: Mutex<PendingChanges>,
}

impl PgStorage {
    /// Creates a new storage with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            pending: Mutex::new(PendingChanges::default()),
        }
    }

    /// Applies embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Migration`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn all(&self, kind: ObjectKind) -> Result<HashMap<String, Object>, StorageError> {
        let rows: Vec<Json<Object>> =
            sqlx::query_scalar("SELECT data FROM objects WHERE class = $1")
                .bind(kind.as_str())
                .fetch_all(self.pool.as_ref())
                .await?;

        let mut objects: HashMap<String, Object> = rows
            .into_iter()
            .map(|Json(object)| (object.id().to_string(), object))
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

        let row: Option<Json<Object>> =
            sqlx::query_scalar("SELECT data FROM objects WHERE class = $1 AND id = $2")
                .bind(kind.as_str())
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|Json(object)| object))
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

        let mut tx = self.pool.begin().await?;

        for change in pending.iter() {
            match change {
                PendingChange::Upsert(object) => {
                    sqlx::query(
                        r#"
                        INSERT INTO objects (class, id, data, created_at, updated_at)
                        VALUES ($1, $2, $3, $4, $5)
                        ON CONFLICT (class, id)
                        DO UPDATE SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at
                        "#,
                    )
                    .bind(object.kind().as_str())
                    .bind(object.id())
                    .bind(Json(object))
                    .bind(object.created_at())
                    .bind(object.updated_at())
                    .execute(&mut *tx)
                    .await?;
                }
                PendingChange::Delete { kind, id } => {
                    sqlx::query("DELETE FROM objects WHERE class = $1 AND id = $2")
                        .bind(kind.as_str())
                        .bind(id.as_str())
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await?;
        tracing::debug!(changes = pending.len(), "storage changes committed");
        pending.clear();

        Ok(())
    }

    async fn count(&self, kind: ObjectKind) -> Result<usize, StorageError> {
        if self.pending.lock().await.touches(kind) {
            return Ok(self.all(kind).await?.len());
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM objects WHERE class = $1")
            .bind(kind.as_str())
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(usize::try_from(count).unwrap_or_default())
    }

    async fn check(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
