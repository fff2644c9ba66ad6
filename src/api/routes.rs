//! API route configuration.

use crate::api::handlers::{
    amenity_list_handler, create_amenity_handler, create_review_handler, create_user_handler,
    delete_amenity_handler, delete_review_handler, delete_user_handler, get_amenity_handler,
    get_review_handler, get_user_handler, review_list_handler, stats_handler, status_handler,
    update_amenity_handler, update_review_handler, update_user_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All resource and index routes.
///
/// # Endpoints
///
/// - `GET    /status`                   - Liveness
/// - `GET    /stats`                    - Object counts per class
/// - `GET    /amenities`                - List amenities
/// - `POST   /amenities`                - Create an amenity
/// - `GET    /amenities/{id}`           - Get an amenity
/// - `PUT    /amenities/{id}`           - Update an amenity
/// - `DELETE /amenities/{id}`           - Delete an amenity
/// - `GET    /users`                    - List users
/// - `POST   /users`                    - Create a user
/// - `GET    /users/{id}`               - Get a user
/// - `PUT    /users/{id}`               - Update a user
/// - `DELETE /users/{id}`               - Delete a user
/// - `GET    /places/{place_id}/reviews` - List the reviews of a place
/// - `POST   /places/{place_id}/reviews` - Review a place
/// - `GET    /reviews/{id}`             - Get a review
/// - `PUT    /reviews/{id}`             - Update a review
/// - `DELETE /reviews/{id}`             - Delete a review
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status_handler))
        .route("/stats", get(stats_handler))
        .route(
            "/amenities",
            get(amenity_list_handler).post(create_amenity_handler),
        )
        .route(
            "/amenities/{id}",
            get(get_amenity_handler)
                .put(update_amenity_handler)
                .delete(delete_amenity_handler),
        )
        .route("/users", get(user_list_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/places/{place_id}/reviews",
            get(review_list_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{id}",
            get(get_review_handler)
                .put(update_review_handler)
                .delete(delete_review_handler),
        )
}
