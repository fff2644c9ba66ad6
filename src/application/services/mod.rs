//! Business logic services for the application layer.

pub mod amenity_service;
mod objects;
pub mod place_service;
pub mod review_service;
pub mod stats_service;
pub mod user_service;

pub use amenity_service::AmenityService;
pub use place_service::PlaceService;
pub use review_service::ReviewService;
pub use stats_service::{ObjectCounts, StatsService};
pub use user_service::UserService;
