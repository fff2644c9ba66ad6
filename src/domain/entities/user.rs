//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::object::{Entity, Object, ObjectKind, new_id};

/// A registered user.
///
/// `email` is fixed at creation; every other field can be patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn new(new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            created_at: now,
            updated_at: now,
            email: new_user.email,
            password: new_user.password,
            first_name: new_user.first_name.unwrap_or_default(),
            last_name: new_user.last_name.unwrap_or_default(),
        }
    }

    /// Applies a patch and bumps `updated_at`.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        self.updated_at = Utc::now();
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Mutable user fields. `email` is immutable and has no patch field.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for Object {
    fn from(user: User) -> Self {
        Object::User(user)
    }
}

impl Entity for User {
    const KIND: ObjectKind = ObjectKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_object(object: Object) -> Option<Self> {
        match object {
            Object::User(user) => Some(user),
            _ => None,
        }
    }
}
