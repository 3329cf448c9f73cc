use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::default_true;

/// A back-office team account. Authenticates against `/api/auth/login`.
///
/// `password_hash` is an argon2id PHC string and never leaves the server;
/// the struct only derives `Serialize` and skips the hash entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Payload for creating a team account. The plaintext password is hashed
/// by the handler before it reaches storage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl TeamAccount {
    pub fn new(name: String, email: String, password_hash: String, active: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            active,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let account = TeamAccount::new(
            "Ana".into(),
            "ana@vitrine.store".into(),
            "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            true,
        );
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ana@vitrine.store");
    }
}
