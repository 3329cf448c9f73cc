use thiserror::Error;

/// Errors from session issuing/verification and credential checks.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Session expired")]
    TokenExpired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

impl AuthError {
    /// Create a new InvalidToken error
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken(message.into())
    }

    /// Create a new Hashing error
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing(message.into())
    }

    /// True for errors the gate treats as "no valid session".
    ///
    /// Malformed and expired tokens are indistinguishable from an absent
    /// one; only hashing failures are genuine server faults.
    pub fn is_unauthenticated(&self) -> bool {
        !matches!(self, Self::Hashing(_))
    }
}
