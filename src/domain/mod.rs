//! Domain layer containing business entities and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definition
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the HTTP layer
//! - The storage trait defines the contract implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
