//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::index::EmptyResponse;
use crate::api::extract::JsonBody;
use crate::domain::entities::{NewUser, Object, UserPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Object>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(Object::from).collect()))
}

/// Retrieves one user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Object>, AppError> {
    let user = state.user_service.get_user(&id).await?;

    Ok(Json(user.into()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object or `email` or `password` is missing.
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Object>), AppError> {
    let new_user = NewUser::try_from(&body)?;
    let user = state.user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Updates a user's mutable fields.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// `email` cannot be changed; it is dropped from the body like `id` and the
/// timestamps.
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object or a field has the wrong type.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Json<Object>, AppError> {
    let patch = UserPatch::try_from(&body)?;
    let user = state.user_service.update_user(&id, patch).await?;

    Ok(Json(user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EmptyResponse>, AppError> {
    state.user_service.delete_user(&id).await?;

    Ok(Json(EmptyResponse::default()))
}
