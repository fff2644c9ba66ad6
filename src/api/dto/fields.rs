//! Field-level helpers for turning a [`JsonBody`] into typed inputs.

use serde_json::Value;

use crate::api::extract::JsonBody;
use crate::error::AppError;

/// Server-managed fields present on every entity.
pub const PROTECTED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Fails with `Missing <field>` for the first absent field, in order.
pub fn require(body: &JsonBody, fields: &[&str]) -> Result<(), AppError> {
    match fields.iter().find(|field| !body.contains(field)) {
        Some(field) => Err(AppError::missing(field)),
        None => Ok(()),
    }
}

/// Reads an optional string field. Any other JSON type is `Invalid <field>`.
pub fn string_field(body: &JsonBody, field: &str) -> Result<Option<String>, AppError> {
    match body.get(field) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(AppError::invalid(field)),
    }
}

/// Logs every key of `body` that is neither protected nor in `accepted`.
pub fn log_ignored(body: &JsonBody, entity: &str, accepted: &[&str]) {
    for key in body.keys() {
        if !accepted.contains(&key) && !PROTECTED_FIELDS.contains(&key) {
            tracing::debug!(entity, field = key, "ignoring unknown field");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> JsonBody {
        match value {
            Value::Object(map) => JsonBody(map),
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_require_reports_first_missing_in_order() {
        let empty = body(json!({}));
        assert_eq!(
            require(&empty, &["email", "password"])
                .unwrap_err()
                .to_string(),
            "Missing email"
        );

        let only_email = body(json!({"email": "a@b.com"}));
        assert_eq!(
            require(&only_email, &["email", "password"])
                .unwrap_err()
                .to_string(),
            "Missing password"
        );

        let both = body(json!({"email": "a@b.com", "password": "x"}));
        assert!(require(&both, &["email", "password"]).is_ok());
    }

    #[test]
    fn test_require_counts_null_as_present() {
        let with_null = body(json!({"name": null}));
        assert!(require(&with_null, &["name"]).is_ok());
    }

    #[test]
    fn test_string_field_types() {
        let value = body(json!({"name": "Wifi", "count": 3}));

        assert_eq!(
            string_field(&value, "name").unwrap(),
            Some("Wifi".to_string())
        );
        assert_eq!(string_field(&value, "absent").unwrap(), None);
        assert_eq!(
            string_field(&value, "count").unwrap_err().to_string(),
            "Invalid count"
        );
    }
}
