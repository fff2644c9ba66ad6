//! Storage-level representation shared by every entity type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amenity, Place, Review, User};

/// Discriminates the entity classes known to the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    Amenity,
    Place,
    Review,
    User,
}

impl ObjectKind {
    /// Every kind, in the order used by the stats endpoint.
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::Amenity,
        ObjectKind::Place,
        ObjectKind::Review,
        ObjectKind::User,
    ];

    /// Class name as written in the `__class__` field and storage keys.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Amenity => "Amenity",
            ObjectKind::Place => "Place",
            ObjectKind::Review => "Review",
            ObjectKind::User => "User",
        }
    }

    /// Plural collection name used in route paths and stats output.
    pub fn collection(self) -> &'static str {
        match self {
            ObjectKind::Amenity => "amenities",
            ObjectKind::Place => "places",
            ObjectKind::Review => "reviews",
            ObjectKind::User => "users",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known entity class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown class: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ObjectKind {
    type Err = UnknownKind;

    /// Accepts either the class name (`Review`) or the collection name (`reviews`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(s) || kind.collection().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Any persisted entity.
///
/// Serializes to the entity's own fields plus a `__class__` discriminator,
/// which is the form returned by the API and written by the file backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Object {
    Amenity(Amenity),
    Place(Place),
    Review(Review),
    User(User),
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Amenity(_) => ObjectKind::Amenity,
            Object::Place(_) => ObjectKind::Place,
            Object::Review(_) => ObjectKind::Review,
            Object::User(_) => ObjectKind::User,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Object::Amenity(a) => &a.id,
            Object::Place(p) => &p.id,
            Object::Review(r) => &r.id,
            Object::User(u) => &u.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Object::Amenity(a) => a.created_at,
            Object::Place(p) => p.created_at,
            Object::Review(r) => r.created_at,
            Object::User(u) => u.created_at,
        }
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            Object::Amenity(a) => a.updated_at,
            Object::Place(p) => p.updated_at,
            Object::Review(r) => r.updated_at,
            Object::User(u) => u.updated_at,
        }
    }

    /// Storage key in the `<Class>.<id>` form.
    pub fn key(&self) -> String {
        object_key(self.kind(), self.id())
    }
}

/// Builds the `<Class>.<id>` storage key.
pub fn object_key(kind: ObjectKind, id: &str) -> String {
    format!("{}.{}", kind.as_str(), id)
}

/// Typed view over one [`Object`] variant.
pub trait Entity: Clone + Send + Sync + Into<Object> + 'static {
    const KIND: ObjectKind;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Extracts the entity if `object` is of this kind.
    fn from_object(object: Object) -> Option<Self>;
}

/// Generates a fresh identifier for a new entity.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
