//! Place seeding service used by the admin tooling.

use std::sync::Arc;

use crate::domain::entities::{NewPlace, Place, User};
use crate::domain::repositories::Storage;
use crate::error::AppError;

use super::objects;

/// Creates and lists places. Places have no HTTP surface of their own.
pub struct PlaceService<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> PlaceService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn list_places(&self) -> Result<Vec<Place>, AppError> {
        objects::list(self.storage.as_ref()).await
    }

    /// Creates a place owned by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    pub async fn create_place(&self, new_place: NewPlace) -> Result<Place, AppError> {
        let _owner: User = objects::fetch(self.storage.as_ref(), &new_place.user_id).await?;

        let place = objects::create(self.storage.as_ref(), Place::new(new_place)).await?;
        tracing::info!(id = %place.id, "place created");
        Ok(place)
    }
}
