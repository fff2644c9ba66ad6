//! Changes staged by `insert`/`delete` and not yet saved.

use std::collections::HashMap;

use crate::domain::entities::{Object, ObjectKind, object_key};

use super::memory_storage::ObjectMap;

#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Upsert(Object),
    Delete { kind: ObjectKind, id: String },
}

impl PendingChange {
    pub fn kind(&self) -> ObjectKind {
        match self {
            PendingChange::Upsert(object) => object.kind(),
            PendingChange::Delete { kind, .. } => *kind,
        }
    }
}

/// Staged changes keyed by `<Class>.<id>`.
///
/// Only the latest change per key is kept, so the set never grows beyond the
/// number of distinct objects touched since the last successful save.
#[derive(Debug, Default)]
pub struct PendingChanges {
    changes: HashMap<String, PendingChange>,
}

impl PendingChanges {
    pub fn upsert(&mut self, object: Object) {
        self.changes
            .insert(object.key(), PendingChange::Upsert(object));
    }

    pub fn delete(&mut self, object: &Object) {
        self.changes.insert(
            object.key(),
            PendingChange::Delete {
                kind: object.kind(),
                id: object.id().to_string(),
            },
        );
    }

    pub fn get(&self, kind: ObjectKind, id: &str) -> Option<&PendingChange> {
        self.changes.get(&object_key(kind, id))
    }

    pub fn touches(&self, kind: ObjectKind) -> bool {
        self.changes.values().any(|change| change.kind() == kind)
    }

    /// Applies changes of `kind` to a map of objects keyed by id.
    pub fn overlay(&self, kind: ObjectKind, objects: &mut HashMap<String, Object>) {
        for change in self.changes.values().filter(|change| change.kind() == kind) {
            match change {
                PendingChange::Upsert(object) => {
                    objects.insert(object.id().to_string(), object.clone());
                }
                PendingChange::Delete { id, .. } => {
                    objects.remove(id);
                }
            }
        }
    }

    /// Applies every change to a map keyed by storage key.
    pub fn apply(&self, objects: &mut ObjectMap) {
        for (key, change) in &self.changes {
            match change {
                PendingChange::Upsert(object) => {
                    objects.insert(key.clone(), object.clone());
                }
                PendingChange::Delete { .. } => {
                    objects.remove(key);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingChange> {
        self.changes.values()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Amenity, NewAmenity};

    fn amenity(name: &str) -> Object {
        Amenity::new(NewAmenity {
            name: name.to_string(),
        })
        .into()
    }

    #[test]
    fn test_latest_change_per_key_wins() {
        let wifi = amenity("Wifi");
        let mut pending = PendingChanges::default();

        pending.upsert(wifi.clone());
        pending.delete(&wifi);
        pending.upsert(wifi.clone());

        assert_eq!(pending.len(), 1);
        assert_eq!(
            pending.get(ObjectKind::Amenity, wifi.id()),
            Some(&PendingChange::Upsert(wifi))
        );
    }

    #[test]
    fn test_overlay_and_apply() {
        let wifi = amenity("Wifi");
        let pool = amenity("Pool");
        let mut pending = PendingChanges::default();
        pending.upsert(pool.clone());
        pending.delete(&wifi);

        let mut by_id = HashMap::from([(wifi.id().to_string(), wifi.clone())]);
        pending.overlay(ObjectKind::Amenity, &mut by_id);
        assert_eq!(by_id.len(), 1);
        assert!(by_id.contains_key(pool.id()));

        let mut by_key = ObjectMap::from([(wifi.key(), wifi.clone())]);
        pending.apply(&mut by_key);
        assert_eq!(by_key.len(), 1);
        assert!(by_key.contains_key(&pool.key()));

        assert!(pending.touches(ObjectKind::Amenity));
        assert!(!pending.touches(ObjectKind::User));
    }
}
