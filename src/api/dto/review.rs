//! Review request bodies.

use crate::api::dto::fields::{log_ignored, require, string_field};
use crate::api::extract::JsonBody;
use crate::domain::entities::{NewReview, ReviewPatch};
use crate::error::AppError;

const FIELDS: &[&str] = &["user_id", "place_id", "text"];

/// `place_id` comes from the route; a body value is ignored.
impl TryFrom<&JsonBody> for NewReview {
    type Error = AppError;

    fn try_from(body: &JsonBody) -> Result<Self, Self::Error> {
        require(body, &["user_id", "text"])?;
        log_ignored(body, "Review", FIELDS);

        Ok(Self {
            user_id: string_field(body, "user_id")?.unwrap_or_default(),
            text: string_field(body, "text")?.unwrap_or_default(),
        })
    }
}

impl TryFrom<&JsonBody> for ReviewPatch {
    type Error = AppError;

    fn try_from(body: &JsonBody) -> Result<Self, Self::Error> {
        log_ignored(body, "Review", FIELDS);

        Ok(Self {
            text: string_field(body, "text")?,
        })
    }
}
