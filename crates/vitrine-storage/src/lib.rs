//! Storage abstraction layer for the Vitrine storefront.
//!
//! This crate defines the persistence contract the HTTP layer programs
//! against. Backends are black boxes behind [`StorefrontStorage`]; the
//! workspace ships an in-memory implementation in `vitrine-db-memory`.

pub mod error;
pub mod traits;

pub use error::{ErrorCategory, StorageError};
pub use traits::StorefrontStorage;

/// Type alias for a shareable storage instance.
pub type DynStorage = std::sync::Arc<dyn StorefrontStorage>;
