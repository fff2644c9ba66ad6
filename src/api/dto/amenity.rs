//! Amenity request bodies.

use crate::api::dto::fields::{log_ignored, require, string_field};
use crate::api::extract::JsonBody;
use crate::domain::entities::{AmenityPatch, NewAmenity};
use crate::error::AppError;

const FIELDS: &[&str] = &["name"];

impl TryFrom<&JsonBody> for NewAmenity {
    type Error = AppError;

    fn try_from(body: &JsonBody) -> Result<Self, Self::Error> {
        require(body, &["name"])?;
        log_ignored(body, "Amenity", FIELDS);

        Ok(Self {
            name: string_field(body, "name")?.unwrap_or_default(),
        })
    }
}

impl TryFrom<&JsonBody> for AmenityPatch {
    type Error = AppError;

    fn try_from(body: &JsonBody) -> Result<Self, Self::Error> {
        log_ignored(body, "Amenity", FIELDS);

        Ok(Self {
            name: string_field(body, "name")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn body(value: Value) -> JsonBody {
        match value {
            Value::Object(map) => JsonBody(map),
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_new_amenity_requires_name() {
        let err = NewAmenity::try_from(&body(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "Missing name");

        let err = NewAmenity::try_from(&body(json!({"name": 42}))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid name");
    }

    #[test]
    fn test_new_amenity_skips_protected_fields() {
        let new_amenity =
            NewAmenity::try_from(&body(json!({"name": "Wifi", "id": "forced"}))).unwrap();
        assert_eq!(new_amenity.name, "Wifi");
    }

    #[test]
    fn test_patch_without_name_is_empty() {
        let patch = AmenityPatch::try_from(&body(json!({"created_at": "x"}))).unwrap();
        assert!(patch.name.is_none());
    }
}
