//! Amenity management service.

use std::sync::Arc;

use crate::domain::entities::{Amenity, AmenityPatch, NewAmenity};
use crate::domain::repositories::Storage;
use crate::error::AppError;

use super::objects;

/// CRUD operations over amenities.
pub struct AmenityService<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> AmenityService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Lists every amenity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, AppError> {
        objects::list(self.storage.as_ref()).await
    }

    /// Retrieves an amenity by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the amenity does not exist.
    pub async fn get_amenity(&self, id: &str) -> Result<Amenity, AppError> {
        objects::fetch(self.storage.as_ref(), id).await
    }

    /// Creates and persists a new amenity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn create_amenity(&self, new_amenity: NewAmenity) -> Result<Amenity, AppError> {
        let amenity = objects::create(self.storage.as_ref(), Amenity::new(new_amenity)).await?;
        tracing::info!(id = %amenity.id, "amenity created");
        Ok(amenity)
    }

    /// Applies `patch` to an existing amenity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the amenity does not exist.
    pub async fn update_amenity(&self, id: &str, patch: AmenityPatch) -> Result<Amenity, AppError> {
        let amenity = objects::modify(self.storage.as_ref(), id, |amenity: &mut Amenity| {
            amenity.apply(patch)
        })
        .await?;
        tracing::info!(id = %amenity.id, "amenity updated");
        Ok(amenity)
    }

    /// Deletes an amenity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the amenity does not exist.
    pub async fn delete_amenity(&self, id: &str) -> Result<(), AppError> {
        objects::remove::<Amenity, _>(self.storage.as_ref(), id).await?;
        tracing::info!(id, "amenity deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Object, ObjectKind};
    use crate::domain::repositories::{MockStorage, StorageError};
    use mockall::Sequence;
    use std::collections::HashMap;

    fn create_test_amenity(name: &str) -> Amenity {
        Amenity::new(NewAmenity {
            name: name.to_string(),
        })
    }

    fn disk_full() -> StorageError {
        StorageError::Io(std::io::Error::other("disk full"))
    }

    #[tokio::test]
    async fn test_create_amenity_persists() {
        let mut mock_storage = MockStorage::new();

        mock_storage
            .expect_insert()
            .withf(|object| matches!(object, Object::Amenity(a) if a.name == "Wifi"))
            .times(1)
            .returning(|_| Ok(()));
        mock_storage.expect_save().times(1).returning(|| Ok(()));

        let service = AmenityService::new(Arc::new(mock_storage));

        let amenity = service
            .create_amenity(NewAmenity {
                name: "Wifi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(amenity.name, "Wifi");
    }

    #[tokio::test]
    async fn test_get_amenity_not_found() {
        let mut mock_storage = MockStorage::new();

        mock_storage
            .expect_get()
            .withf(|kind, id| *kind == ObjectKind::Amenity && id == "missing")
            .times(1)
            .returning(|_, _| Ok(None));

        let service = AmenityService::new(Arc::new(mock_storage));

        let result = service.get_amenity("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_amenity_keeps_identity() {
        let mut mock_storage = MockStorage::new();

        let existing = create_test_amenity("Wifi");
        let id = existing.id.clone();
        let created_at = existing.created_at;
        mock_storage
            .expect_get()
            .times(1)
            .returning(move |_, _| Ok(Some(Object::Amenity(existing.clone()))));
        mock_storage.expect_insert().times(1).returning(|_| Ok(()));
        mock_storage.expect_save().times(1).returning(|| Ok(()));

        let service = AmenityService::new(Arc::new(mock_storage));

        let updated = service
            .update_amenity(
                &id,
                AmenityPatch {
                    name: Some("Pool".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Pool");
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn test_update_amenity_not_found_does_not_save() {
        let mut mock_storage = MockStorage::new();

        mock_storage
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_storage.expect_save().never();

        let service = AmenityService::new(Arc::new(mock_storage));

        let result = service
            .update_amenity("missing", AmenityPatch::default())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_amenity() {
        let mut mock_storage = MockStorage::new();

        let existing = create_test_amenity("Wifi");
        mock_storage
            .expect_get()
            .times(1)
            .returning(move |_, _| Ok(Some(Object::Amenity(existing.clone()))));
        mock_storage.expect_delete().times(1).returning(|_| Ok(()));
        mock_storage.expect_save().times(1).returning(|| Ok(()));

        let service = AmenityService::new(Arc::new(mock_storage));

        assert!(service.delete_amenity("any").await.is_ok());
    }

    #[tokio::test]
    async fn test_create_amenity_failed_save_discards_staged() {
        let mut mock_storage = MockStorage::new();
        let mut seq = Sequence::new();

        mock_storage
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_storage
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(disk_full()));
        mock_storage
            .expect_delete()
            .withf(|object| matches!(object, Object::Amenity(a) if a.name == "Wifi"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = AmenityService::new(Arc::new(mock_storage));

        let result = service
            .create_amenity(NewAmenity {
                name: "Wifi".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_update_amenity_failed_save_restores_previous() {
        let mut mock_storage = MockStorage::new();
        let mut seq = Sequence::new();

        let existing = create_test_amenity("Wifi");
        let id = existing.id.clone();
        mock_storage
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(Some(Object::Amenity(existing.clone()))));
        mock_storage
            .expect_insert()
            .withf(|object| matches!(object, Object::Amenity(a) if a.name == "Pool"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_storage
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(disk_full()));
        mock_storage
            .expect_insert()
            .withf(|object| matches!(object, Object::Amenity(a) if a.name == "Wifi"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = AmenityService::new(Arc::new(mock_storage));

        let result = service
            .update_amenity(
                &id,
                AmenityPatch {
                    name: Some("Pool".to_string()),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_delete_amenity_failed_save_restores_it() {
        let mut mock_storage = MockStorage::new();
        let mut seq = Sequence::new();

        let existing = create_test_amenity("Wifi");
        let id = existing.id.clone();
        let restored = existing.clone();
        mock_storage
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, _| Ok(Some(Object::Amenity(existing.clone()))));
        mock_storage
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_storage
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(disk_full()));
        mock_storage
            .expect_insert()
            .withf(move |object| *object == Object::Amenity(restored.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = AmenityService::new(Arc::new(mock_storage));

        let result = service.delete_amenity(&id).await;

        assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_list_amenities_sorted_by_creation() {
        let mut mock_storage = MockStorage::new();

        let first = create_test_amenity("First");
        let mut second = create_test_amenity("Second");
        second.created_at = first.created_at + chrono::Duration::seconds(1);

        let objects: HashMap<String, Object> = [
            (second.id.clone(), Object::Amenity(second.clone())),
            (first.id.clone(), Object::Amenity(first.clone())),
        ]
        .into_iter()
        .collect();
        mock_storage
            .expect_all()
            .withf(|kind| *kind == ObjectKind::Amenity)
            .times(1)
            .returning(move |_| Ok(objects.clone()));

        let service = AmenityService::new(Arc::new(mock_storage));

        let list = service.list_amenities().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "First");
        assert_eq!(list[1].name, "Second");
    }
}
