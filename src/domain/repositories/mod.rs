//! Storage interface definitions for the domain layer.
//!
//! The [`Storage`] trait abstracts persistence behind the `all` / `get` /
//! `insert` / `delete` / `save` contract. Services receive it as an injected
//! `Arc`, so any backend (or a mock) can stand in.
//!
//! # Architecture
//!
//! - The trait defines the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - A mock implementation is auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See `tests/storage_*.rs` for backend behavior tests.

pub mod storage;

pub use storage::{Storage, StorageError};

#[cfg(test)]
pub use storage::MockStorage;
