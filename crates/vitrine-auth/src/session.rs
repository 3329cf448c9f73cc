//! Signed session tokens.
//!
//! Sessions are HS256 JWTs carried in an http-only cookie. The gate and
//! the `/api/auth` handlers are the only consumers; handlers never look at
//! the cookie themselves.

use cookie::{Cookie, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use vitrine_core::TeamAccount;

use crate::error::AuthError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "vitrine_session";

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Team-account id.
    pub sub: String,
    /// Display name, for the session endpoint.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiry (unix seconds).
    pub exp: i64,
}

/// Issues and verifies session tokens against the configured secret.
///
/// Verification is a single synchronous call; the service never retries
/// and never mutates anything.
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl SessionService {
    /// Creates a service signing with the given secret. `ttl_secs` bounds
    /// the lifetime of issued sessions.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs,
        }
    }

    /// Issues a session token for a team account.
    pub fn issue(&self, account: &TeamAccount) -> Result<String, AuthError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = SessionClaims {
            sub: account.id.to_string(),
            name: account.name.clone(),
            email: account.email.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::invalid_token(e.to_string()))
    }

    /// Verifies a session token, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` for expired tokens and
    /// `AuthError::InvalidToken` for anything malformed or missigned; the
    /// gate treats both the same as an absent token.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::invalid_token(e.to_string()),
            })
    }

    /// Builds the http-only session cookie carrying a freshly issued token.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(cookie::time::Duration::seconds(self.ttl_secs))
            .build()
    }

    /// Builds an expired cookie that clears the session on the client.
    pub fn clear_cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(cookie::time::Duration::ZERO)
            .build()
    }
}
