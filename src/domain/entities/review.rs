//! Review entity, always attached to a place and written by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::object::{Entity, Object, ObjectKind, new_id};

/// A review left by a user on a place.
///
/// `place_id` and `user_id` reference entities that existed when the review
/// was created. Neither can be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

impl Review {
    /// Creates a review for `place_id`. Callers must have checked that both
    /// the place and the author exist.
    pub fn new(place_id: impl Into<String>, new_review: NewReview) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            created_at: now,
            updated_at: now,
            place_id: place_id.into(),
            user_id: new_review.user_id,
            text: new_review.text,
        }
    }

    pub fn apply(&mut self, patch: ReviewPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        self.updated_at = Utc::now();
    }
}

/// Input data for creating a new review. The place comes from the route.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub text: Option<String>,
}

impl From<Review> for Object {
    fn from(review: Review) -> Self {
        Object::Review(review)
    }
}

impl Entity for Review {
    const KIND: ObjectKind = ObjectKind::Review;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_object(object: Object) -> Option<Self> {
        match object {
            Object::Review(review) => Some(review),
            _ => None,
        }
    }
}
