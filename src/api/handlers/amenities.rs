//! Handlers for amenity endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::index::EmptyResponse;
use crate::api::extract::JsonBody;
use crate::domain::entities::{AmenityPatch, NewAmenity, Object};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all amenities.
///
/// # Endpoint
///
/// `GET /amenities`
pub async fn amenity_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Object>>, AppError> {
    let amenities = state.amenity_service.list_amenities().await?;

    Ok(Json(amenities.into_iter().map(Object::from).collect()))
}

/// Retrieves one amenity.
///
/// # Endpoint
///
/// `GET /amenities/{id}`
///
/// # Errors
///
/// Returns 404 if the amenity does not exist.
pub async fn get_amenity_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Object>, AppError> {
    let amenity = state.amenity_service.get_amenity(&id).await?;

    Ok(Json(amenity.into()))
}

/// Creates an amenity.
///
/// # Endpoint
///
/// `POST /amenities`
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object or `name` is missing.
pub async fn create_amenity_handler(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Object>), AppError> {
    let new_amenity = NewAmenity::try_from(&body)?;
    let amenity = state.amenity_service.create_amenity(new_amenity).await?;

    Ok((StatusCode::CREATED, Json(amenity.into())))
}

/// Updates an amenity's mutable fields.
///
/// # Endpoint
///
/// `PUT /amenities/{id}`
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object or a field has the wrong type.
/// Returns 404 if the amenity does not exist.
pub async fn update_amenity_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Json<Object>, AppError> {
    let patch = AmenityPatch::try_from(&body)?;
    let amenity = state.amenity_service.update_amenity(&id, patch).await?;

    Ok(Json(amenity.into()))
}

/// Deletes an amenity.
///
/// # Endpoint
///
/// `DELETE /amenities/{id}`
///
/// # Errors
///
/// Returns 404 if the amenity does not exist.
pub async fn delete_amenity_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EmptyResponse>, AppError> {
    state.amenity_service.delete_amenity(&id).await?;

    Ok(Json(EmptyResponse::default()))
}
