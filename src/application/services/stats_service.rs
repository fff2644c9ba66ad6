//! Object count statistics.

use std::sync::Arc;

use crate::domain::entities::ObjectKind;
use crate::domain::repositories::Storage;
use crate::error::AppError;

/// Number of stored objects per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectCounts {
    pub amenities: usize,
    pub places: usize,
    pub reviews: usize,
    pub users: usize,
}

/// Service for storage-wide statistics and health.
pub struct StatsService<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> StatsService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Counts stored objects of every class.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn counts(&self) -> Result<ObjectCounts, AppError> {
        Ok(ObjectCounts {
            amenities: self.storage.count(ObjectKind::Amenity).await?,
            places: self.storage.count(ObjectKind::Place).await?,
            reviews: self.storage.count(ObjectKind::Review).await?,
            users: self.storage.count(ObjectKind::User).await?,
        })
    }

    /// Checks that the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if it is not.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.storage.check().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStorage;

    #[tokio::test]
    async fn test_counts_per_kind() {
        let mut mock_storage = MockStorage::new();

        mock_storage.expect_count().times(4).returning(|kind| {
            Ok(match kind {
                ObjectKind::Amenity => 3,
                ObjectKind::Place => 2,
                ObjectKind::Review => 1,
                ObjectKind::User => 5,
            })
        });

        let service = StatsService::new(Arc::new(mock_storage));

        let counts = service.counts().await.unwrap();

        assert_eq!(
            counts,
            ObjectCounts {
                amenities: 3,
                places: 2,
                reviews: 1,
                users: 5,
            }
        );
    }
}
