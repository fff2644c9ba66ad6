//! Review management service.

use std::sync::Arc;

use crate::domain::entities::{NewReview, Place, Review, ReviewPatch, User};
use crate::domain::repositories::Storage;
use crate::error::AppError;

use super::objects;

/// CRUD operations over reviews, which are nested under places.
///
/// Creation takes a place already resolved through [`ReviewService::get_place`]
/// and checks that the author exists.
pub struct ReviewService<S: Storage + ?Sized> {
    storage: Arc<S>,
}

impl<S: Storage + ?Sized> ReviewService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Retrieves the parent place of a review route.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    pub async fn get_place(&self, place_id: &str) -> Result<Place, AppError> {
        objects::fetch(self.storage.as_ref(), place_id).await
    }

    /// Lists the reviews of one place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    pub async fn list_reviews(&self, place_id: &str) -> Result<Vec<Review>, AppError> {
        self.get_place(place_id).await?;

        let reviews: Vec<Review> = objects::list(self.storage.as_ref()).await?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.place_id == place_id)
            .collect())
    }

    /// Retrieves a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    pub async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        objects::fetch(self.storage.as_ref(), id).await
    }

    /// Creates a review on `place`, as resolved by [`Self::get_place`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist. Nothing
    /// is persisted in that case.
    pub async fn create_review(
        &self,
        place: &Place,
        new_review: NewReview,
    ) -> Result<Review, AppError> {
        let _author: User = objects::fetch(self.storage.as_ref(), &new_review.user_id).await?;

        let review = objects::create(
            self.storage.as_ref(),
            Review::new(place.id.as_str(), new_review),
        )
        .await?;
        tracing::info!(id = %review.id, place_id = %place.id, "review created");
        Ok(review)
    }

    /// Applies `patch` to a review. The place and author never change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    pub async fn update_review(&self, id: &str, patch: ReviewPatch) -> Result<Review, AppError> {
        let review = objects::modify(self.storage.as_ref(), id, |review: &mut Review| {
            review.apply(patch)
        })
        .await?;
        tracing::info!(id = %review.id, "review updated");
        Ok(review)
    }

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    pub async fn delete_review(&self, id: &str) -> Result<(), AppError> {
        objects::remove::<Review, _>(self.storage.as_ref(), id).await?;
        tracing::info!(id, "review deleted");
        Ok(())
    }
}
