//! User request bodies.

use crate::api::dto::fields::{log_ignored, require, string_field};
use crate::api::extract::JsonBody;
use crate::domain::entities::{NewUser, UserPatch};
use crate::error::AppError;

const FIELDS: &[&str] = &["email", "password", "first_name", "last_name"];

impl TryFrom<&JsonBody> for NewUser {
    type Error = AppError;

    fn try_from(body: &JsonBody) -> Result<Self, Self::Error> {
        require(body, &["email", "password"])?;
        log_ignored(body, "User", FIELDS);

        Ok(Self {
            email: string_field(body, "email")?.unwrap_or_default(),
            password: string_field(body, "password")?.unwrap_or_default(),
            first_name: string_field(body, "first_name")?,
            last_name: string_field(body, "last_name")?,
        })
    }
}

/// `email` is accepted in the body but never applied.
impl TryFrom<&JsonBody> for UserPatch {
    type Error = AppError;

    fn try_from(body: &JsonBody) -> Result<Self, Self::Error> {
        log_ignored(body, "User", FIELDS);

        Ok(Self {
            password: string_field(body, "password")?,
            first_name: string_field(body, "first_name")?,
            last_name: string_field(body, "last_name")?,
        })
    }
}
