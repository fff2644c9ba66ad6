//! Status and statistics responses.

use serde::Serialize;

use crate::application::services::ObjectCounts;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Object totals keyed by collection name.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub amenities: usize,
    pub places: usize,
    pub reviews: usize,
    pub users: usize,
}

impl From<ObjectCounts> for StatsResponse {
    fn from(counts: ObjectCounts) -> Self {
        Self {
            amenities: counts.amenities,
            places: counts.places,
            reviews: counts.reviews,
            users: counts.users,
        }
    }
}

/// Body of a successful delete: `{}`.
#[derive(Debug, Default, Serialize)]
pub struct EmptyResponse {}
