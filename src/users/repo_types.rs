use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                      // server-assigned, > 0
    pub username: String,             // unique, case-sensitive
    pub email: String,                // unique, case-sensitive
    #[serde(skip_serializing)]
    pub password_hash: String,        // Argon2 hash, not exposed in JSON
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,   // set by the database clock
}

/// Account data supplied by the caller when registering a user.
///
/// `password` holds the plaintext until [`NewUser::hash_password`] runs,
/// and the Argon2 hash from then on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serialization_omits_password_hash() {
        let user = User {
            id: 7,
            username: "bob".into(),
            email: "bob@x.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            first_name: Some("Bob".into()),
            last_name: None,
            created_at: datetime!(2024-05-01 12:00:00 UTC),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("bob@x.com"));
        assert!(json.contains("2024-05-01T12:00:00Z"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn builder_sets_optional_names() {
        let user = NewUser::new("bob", "bob@x.com", "Secret123!")
            .with_first_name("Bob")
            .with_last_name("Builder");
        assert_eq!(user.first_name.as_deref(), Some("Bob"));
        assert_eq!(user.last_name.as_deref(), Some("Builder"));
    }
}
