//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AmenityService, ReviewService, StatsService, UserService};
use crate::domain::repositories::Storage;

/// Services over one shared storage backend.
#[derive(Clone)]
pub struct AppState {
    pub amenity_service: Arc<AmenityService<dyn Storage>>,
    pub user_service: Arc<UserService<dyn Storage>>,
    pub review_service: Arc<ReviewService<dyn Storage>>,
    pub stats_service: Arc<StatsService<dyn Storage>>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            amenity_service: Arc::new(AmenityService::new(storage.clone())),
            user_service: Arc::new(UserService::new(storage.clone())),
            review_service: Arc::new(ReviewService::new(storage.clone())),
            stats_service: Arc::new(StatsService::new(storage)),
        }
    }
}
