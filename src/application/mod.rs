//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::Storage`] trait and
//! provide a typed API for HTTP handlers and the admin tool.
//!
//! # Available Services
//!
//! - [`services::amenity_service::AmenityService`] - Amenity CRUD
//! - [`services::user_service::UserService`] - User CRUD
//! - [`services::review_service::ReviewService`] - Review CRUD nested under places
//! - [`services::place_service::PlaceService`] - Place seeding
//! - [`services::stats_service::StatsService`] - Object counts and storage health

pub mod services;
