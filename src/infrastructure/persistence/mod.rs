//! Storage backend implementations.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - Process-local map, used by tests
//! - [`FileStorage`] - JSON document on disk
//! - [`PgStorage`] - PostgreSQL `objects` table
//!
//! [`connect`] picks one according to [`Config::storage_type`].

pub mod file_storage;
pub mod memory_storage;
pub mod pg_storage;
mod pending;

pub use file_storage::FileStorage;
pub use memory_storage::{MemoryStorage, ObjectMap};
pub use pg_storage::PgStorage;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::{Config, StorageType};
use crate::domain::repositories::Storage;

/// Opens the storage backend selected by `config`.
///
/// The `db` backend retries the initial connection with exponential backoff
/// and applies migrations before returning.
///
/// # Errors
///
/// Returns an error if the storage file cannot be loaded, the database is
/// unreachable after retries, or migrations fail.
pub async fn connect(config: &Config) -> Result<Arc<dyn Storage>> {
    match config.storage_type {
        StorageType::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageType::File => {
            let storage = FileStorage::open(&config.storage_file)
                .await
                .with_context(|| {
                    format!(
                        "Failed to load storage file {}",
                        config.storage_file.display()
                    )
                })?;
            tracing::info!(path = %storage.path().display(), "Using file storage");
            Ok(Arc::new(storage))
        }
        StorageType::Db => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for db storage")?;

            let options = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout));

            let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);
            let pool = Retry::spawn(strategy, || {
                let options = options.clone();
                async move {
                    options.connect(url).await.inspect_err(|e| {
                        tracing::warn!(error = %e, "Database connection attempt failed");
                    })
                }
            })
            .await
            .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            let storage = PgStorage::new(Arc::new(pool));
            storage.migrate().await.context("Failed to migrate")?;

            Ok(Arc::new(storage))
        }
    }
}
