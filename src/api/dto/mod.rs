//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies arrive as a [`JsonBody`](crate::api::extract::JsonBody) and
//! are converted into domain inputs with `TryFrom`. Entities are returned as
//! their stored [`Object`](crate::domain::entities::Object) form.

pub mod amenity;
pub mod fields;
pub mod index;
pub mod review;
pub mod user;
