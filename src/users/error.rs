use thiserror::Error;

use crate::users::validate::ValidationError;

/// Failure modes of [`crate::users::UserRepository`] operations.
///
/// The store only classifies; callers decide how each kind is reported.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// Input rejected before any database access.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Lookup matched no row.
    #[error("user not found")]
    NotFound,

    /// The store rejected or failed the statement (constraint, connectivity, decoding).
    #[error("persistence failure: {0}")]
    Persistence(#[source] sqlx::Error),
}

impl UserStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserStoreError::NotFound)
    }

    /// True when the insert hit a unique constraint (duplicate username or email).
    pub fn is_conflict(&self) -> bool {
        match self {
            UserStoreError::Persistence(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn persistence_keeps_the_driver_error_as_source() {
        let err = UserStoreError::Persistence(sqlx::Error::PoolTimedOut);
        assert!(err.source().is_some());
        assert!(!err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_classified() {
        assert!(UserStoreError::NotFound.is_not_found());
        assert_eq!(UserStoreError::NotFound.to_string(), "user not found");
    }
}
