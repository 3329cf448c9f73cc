//! Storage error types for the storefront storage abstraction layer.

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested entity was not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was not found.
        entity: &'static str,
        /// The id (or slug) that was looked up.
        id: String,
    },

    /// A slug collides with an existing entity of the same kind.
    #[error("Este slug já está em uso: {slug}")]
    DuplicateSlug {
        /// The colliding slug.
        slug: String,
    },

    /// An active social-media record already exists for the platform.
    #[error("Esta plataforma já está cadastrada")]
    DuplicatePlatform {
        /// The colliding platform (wire name).
        platform: String,
    },

    /// A team account already exists for the email.
    #[error("Este e-mail já está cadastrado")]
    DuplicateEmail {
        /// The colliding email.
        email: String,
    },

    /// The entity data is invalid.
    #[error("Invalid entity: {message}")]
    InvalidEntity {
        /// Description of why the entity is invalid.
        message: String,
    },

    /// An internal storage error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StorageError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a new `DuplicateSlug` error.
    #[must_use]
    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        Self::DuplicateSlug { slug: slug.into() }
    }

    /// Creates a new `DuplicatePlatform` error.
    #[must_use]
    pub fn duplicate_platform(platform: impl Into<String>) -> Self {
        Self::DuplicatePlatform {
            platform: platform.into(),
        }
    }

    /// Creates a new `DuplicateEmail` error.
    #[must_use]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates a new `InvalidEntity` error.
    #[must_use]
    pub fn invalid_entity(message: impl Into<String>) -> Self {
        Self::InvalidEntity {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is any uniqueness conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSlug { .. } | Self::DuplicatePlatform { .. } | Self::DuplicateEmail { .. }
        )
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateSlug { .. } | Self::DuplicatePlatform { .. } => ErrorCategory::Conflict,
            Self::DuplicateEmail { .. } => ErrorCategory::Conflict,
            Self::InvalidEntity { .. } => ErrorCategory::Validation,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Categories of storage errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Entity not found.
    NotFound,
    /// Uniqueness conflict (slug, platform or email).
    Conflict,
    /// Validation error.
    Validation,
    /// Internal error.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::Conflict => write!(f, "conflict"),
            Self::Validation => write!(f, "validation"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::not_found("Product", "123");
        assert_eq!(err.to_string(), "Product not found: 123");

        let err = StorageError::duplicate_slug("tenis");
        assert_eq!(err.to_string(), "Este slug já está em uso: tenis");
    }

    #[test]
    fn test_duplicate_platform_message_is_user_facing() {
        // This exact message is surfaced to clients as a 400 body.
        let err = StorageError::duplicate_platform("instagram");
        assert_eq!(err.to_string(), "Esta plataforma já está cadastrada");
    }

    #[test]
    fn test_error_predicates() {
        assert!(StorageError::not_found("Banner", "1").is_not_found());
        assert!(!StorageError::not_found("Banner", "1").is_conflict());
        assert!(StorageError::duplicate_platform("x").is_conflict());
        assert!(StorageError::duplicate_email("a@b.c").is_conflict());
        assert!(StorageError::duplicate_slug("s").is_conflict());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            StorageError::not_found("Product", "1").category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            StorageError::duplicate_platform("instagram").category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            StorageError::invalid_entity("bad").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            StorageError::internal("boom").category(),
            ErrorCategory::Internal
        );
    }
}
