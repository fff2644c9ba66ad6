//! Core domain entities.
//!
//! Entities are plain data structures. Each one carries a server-assigned
//! `id`, `created_at` and `updated_at`, which clients can never set.
//!
//! # Entity Types
//!
//! - [`Amenity`] - A feature offered by places
//! - [`User`] - A registered user
//! - [`Review`] - A user's review of a place
//! - [`Place`] - A rentable place, parent of reviews
//!
//! # Design Pattern
//!
//! Every entity has a `New*` struct used for creation and, where clients can
//! modify it, a `*Patch` struct listing exactly the mutable fields.
//! [`Object`] wraps any entity for the storage layer.

pub mod amenity;
pub mod object;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::{Amenity, AmenityPatch, NewAmenity};
pub use object::{Entity, Object, ObjectKind, UnknownKind, object_key};
pub use place::{NewPlace, Place};
pub use review::{NewReview, Review, ReviewPatch};
pub use user::{NewUser, User, UserPatch};
