//! Request body extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A request body that is a JSON object.
///
/// Rejects with `400 {"error": "Not a JSON"}` when the content type is not
/// JSON, the body does not parse, or it parses to anything but an object.
/// Field-level validation is left to the DTO conversions.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::not_a_json());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::not_a_json())?;

        match serde_json::from_slice(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(AppError::not_a_json()),
        }
    }
}

/// Accepts `application/json` and `application/*+json`, with any parameters.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers("application/merge-patch+json")));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }

    async fn extract(content_type: &str, body: &'static str) -> Result<JsonBody, AppError> {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        JsonBody::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_extracts_object() {
        let body = extract("application/json", r#"{"name": "Wifi"}"#)
            .await
            .unwrap();

        assert!(body.contains("name"));
        assert_eq!(body.get("name"), Some(&Value::from("Wifi")));
    }

    #[tokio::test]
    async fn test_rejects_non_object() {
        for raw in ["[1, 2]", "\"text\"", "null", "{not json"] {
            let err = extract("application/json", raw).await.unwrap_err();
            assert_eq!(err.to_string(), "Not a JSON");
        }
    }

    #[tokio::test]
    async fn test_rejects_wrong_content_type() {
        let err = extract("text/plain", r#"{"name": "Wifi"}"#)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not a JSON");
    }
}
