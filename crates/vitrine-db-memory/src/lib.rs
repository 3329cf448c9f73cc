//! In-memory storage backend for the Vitrine storefront.
//!
//! This crate provides an in-memory implementation of the
//! `StorefrontStorage` trait from `vitrine-storage`, using papaya lock-free
//! maps for concurrent access. It backs the development server and the
//! integration tests; a relational backend can slot in behind the same
//! trait without touching the HTTP layer.

pub mod storage;

pub use storage::InMemoryStorage;

// Re-export the storage trait for convenience
pub use vitrine_storage::{DynStorage, StorageError, StorefrontStorage};

/// Creates a new in-memory storage instance behind the trait object.
pub fn create_storage() -> DynStorage {
    std::sync::Arc::new(InMemoryStorage::new())
}
