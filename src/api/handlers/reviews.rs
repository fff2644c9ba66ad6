//! Handlers for review endpoints.
//!
//! Reviews are listed and created under their place and addressed directly
//! by id otherwise.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::index::EmptyResponse;
use crate::api::extract::JsonBody;
use crate::domain::entities::{NewReview, Object, ReviewPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the reviews of a place.
///
/// # Endpoint
///
/// `GET /places/{place_id}/reviews`
///
/// # Errors
///
/// Returns 404 if the place does not exist.
pub async fn review_list_handler(
    Path(place_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Object>>, AppError> {
    let reviews = state.review_service.list_reviews(&place_id).await?;

    Ok(Json(reviews.into_iter().map(Object::from).collect()))
}

/// `GET /reviews/{id}`
pub async fn get_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Object>, AppError> {
    let review = state.review_service.get_review(&id).await?;

    Ok(Json(review.into()))
}

/// Creates a review on a place.
///
/// # Endpoint
///
/// `POST /places/{place_id}/reviews`
///
/// The place is resolved before the body is looked at, so an unknown place
/// answers 404 even for a malformed body.
///
/// # Errors
///
/// Returns 404 if the place or the referenced user does not exist.
/// Returns 400 if the body is not a JSON object or `user_id`/`text` is missing.
pub async fn create_review_handler(
    Path(place_id): Path<String>,
    State(state): State<AppState>,
    body: Result<JsonBody, AppError>,
) -> Result<(StatusCode, Json<Object>), AppError> {
    let place = state.review_service.get_place(&place_id).await?;

    let new_review = NewReview::try_from(&body?)?;
    let review = state
        .review_service
        .create_review(&place, new_review)
        .await?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Updates the text of a review.
///
/// # Endpoint
///
/// `PUT /reviews/{id}`
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object.
/// Returns 404 if the review does not exist.
pub async fn update_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Json<Object>, AppError> {
    let patch = ReviewPatch::try_from(&body)?;
    let review = state.review_service.update_review(&id, patch).await?;

    Ok(Json(review.into()))
}

/// `DELETE /reviews/{id}`
pub async fn delete_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EmptyResponse>, AppError> {
    state.review_service.delete_review(&id).await?;

    Ok(Json(EmptyResponse::default()))
}
