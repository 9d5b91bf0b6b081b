use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::users::error::UserStoreError;
use crate::users::repo_types::{NewUser, User};

pub fn hash_password(plain: &str) -> Result<String, UserStoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            UserStoreError::Hashing(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, UserStoreError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        UserStoreError::Hashing(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

impl NewUser {
    /// Replaces the plaintext password with its Argon2 hash.
    ///
    /// On error the password is left untouched.
    pub fn hash_password(&mut self) -> Result<(), UserStoreError> {
        self.password = hash_password(&self.password)?;
        Ok(())
    }
}

impl User {
    /// Checks a candidate secret against the stored hash.
    pub fn verify_password(&self, plain: &str) -> Result<bool, UserStoreError> {
        verify_password(plain, &self.password_hash)
    }
}
