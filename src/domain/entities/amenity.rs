//! Amenity entity: a feature a place can offer (Wifi, pool, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::object::{Entity, Object, ObjectKind, new_id};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub name: String,
}

impl Amenity {
    /// Creates an amenity with a fresh id and timestamps.
    pub fn new(new_amenity: NewAmenity) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            created_at: now,
            updated_at: now,
            name: new_amenity.name,
        }
    }

    /// Applies a patch and bumps `updated_at`.
    pub fn apply(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

/// Input data for creating a new amenity.
#[derive(Debug, Clone)]
pub struct NewAmenity {
    pub name: String,
}

/// Mutable amenity fields.
#[derive(Debug, Clone, Default)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl From<Amenity> for Object {
    fn from(amenity: Amenity) -> Self {
        Object::Amenity(amenity)
    }
}

impl Entity for Amenity {
    const KIND: ObjectKind = ObjectKind::Amenity;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_object(object: Object) -> Option<Self> {
        match object {
            Object::Amenity(amenity) => Some(amenity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenity_creation() {
        let amenity = Amenity::new(NewAmenity {
            name: "Wifi".to_string(),
        });

        assert_eq!(amenity.name, "Wifi");
        assert!(!amenity.id.is_empty());
        assert_eq!(amenity.created_at, amenity.updated_at);
    }

    #[test]
    fn test_amenity_ids_are_unique() {
        let a = Amenity::new(NewAmenity {
            name: "A".to_string(),
        });
        let b = Amenity::new(NewAmenity {
            name: "A".to_string(),
        });

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_patch() {
        let mut amenity = Amenity::new(NewAmenity {
            name: "Wifi".to_string(),
        });
        let id = amenity.id.clone();
        let created_at = amenity.created_at;

        amenity.apply(AmenityPatch {
            name: Some("Fast Wifi".to_string()),
        });

        assert_eq!(amenity.name, "Fast Wifi");
        assert_eq!(amenity.id, id);
        assert_eq!(amenity.created_at, created_at);
        assert!(amenity.updated_at >= created_at);
    }

    #[test]
    fn test_apply_empty_patch_keeps_name() {
        let mut amenity = Amenity::new(NewAmenity {
            name: "Wifi".to_string(),
        });

        amenity.apply(AmenityPatch::default());

        assert_eq!(amenity.name, "Wifi");
    }
}
