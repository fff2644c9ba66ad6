//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod amenities;
pub mod index;
pub mod reviews;
pub mod users;

pub use amenities::{
    amenity_list_handler, create_amenity_handler, delete_amenity_handler, get_amenity_handler,
    update_amenity_handler,
};
pub use index::{not_found_handler, stats_handler, status_handler};
pub use reviews::{
    create_review_handler, delete_review_handler, get_review_handler, review_list_handler,
    update_review_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, update_user_handler,
    user_list_handler,
};
