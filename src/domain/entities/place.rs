//! Place entity, the parent resource of reviews.
//!
//! Places have no HTTP CRUD surface; they are created through the `admin`
//! binary or loaded from existing storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::object::{Entity, Object, ObjectKind, new_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: i64,
    #[serde(default)]
    pub number_bathrooms: i64,
    #[serde(default)]
    pub max_guest: i64,
    #[serde(default)]
    pub price_by_night: i64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

impl Place {
    pub fn new(new_place: NewPlace) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            created_at: now,
            updated_at: now,
            city_id: new_place.city_id,
            user_id: new_place.user_id,
            name: new_place.name,
            description: new_place.description,
            number_rooms: new_place.number_rooms,
            number_bathrooms: new_place.number_bathrooms,
            max_guest: new_place.max_guest,
            price_by_night: new_place.price_by_night,
            latitude: new_place.latitude,
            longitude: new_place.longitude,
            amenity_ids: Vec::new(),
        }
    }
}

/// Input data for creating a new place.
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub city_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub number_rooms: i64,
    pub number_bathrooms: i64,
    pub max_guest: i64,
    pub price_by_night: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Place> for Object {
    fn from(place: Place) -> Self {
        Object::Place(place)
    }
}

impl Entity for Place {
    const KIND: ObjectKind = ObjectKind::Place;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_object(object: Object) -> Option<Self> {
        match object {
            Object::Place(place) => Some(place),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_creation() {
        let place = Place::new(NewPlace {
            name: "Loft".to_string(),
            user_id: "user-1".to_string(),
            max_guest: 4,
            ..Default::default()
        });

        assert_eq!(place.name, "Loft");
        assert_eq!(place.max_guest, 4);
        assert!(place.amenity_ids.is_empty());
        assert!(place.latitude.is_none());
    }

    #[test]
    fn test_place_deserializes_with_missing_optional_fields() {
        let json = serde_json::json!({
            "__class__": "Place",
            "id": "p1",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "name": "Cabin"
        });

        let object: Object = serde_json::from_value(json).unwrap();
        let place = Place::from_object(object).unwrap();

        assert_eq!(place.id, "p1");
        assert_eq!(place.name, "Cabin");
        assert_eq!(place.number_rooms, 0);
    }
}
