use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use crate::users::{
    error::UserStoreError,
    handle::{Param, StoreHandle},
    repo_types::{NewUser, User},
};

pub const INSERT_USER: &str = r#"
    INSERT INTO users (username, email, password_hash, created_at, first_name, last_name)
    VALUES ($1, $2, $3, NOW(), $4, $5)
"#;

pub const SELECT_USER_BY_USERNAME: &str = r#"
    SELECT id, username, email, password_hash, first_name, last_name, created_at
    FROM users
    WHERE username = $1
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
    SELECT id, username, email, password_hash, first_name, last_name, created_at
    FROM users
    WHERE email = $1
"#;

/// Account persistence used by the auth service.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Validates and hashes `user` in place, then inserts it.
    async fn create(&self, user: &mut NewUser) -> Result<(), UserStoreError>;

    /// Exact, case-sensitive username lookup.
    async fn find_by_username(&self, username: &str) -> Result<User, UserStoreError>;

    /// Exact, case-sensitive email lookup.
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError>;
}

/// [`UserRepository`] over an injected relational store handle.
#[derive(Clone)]
pub struct UserStore {
    db: Arc<dyn StoreHandle>,
}

impl UserStore {
    pub fn new(db: Arc<dyn StoreHandle>) -> Self {
        Self { db }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(pool))
    }

    async fn find_one(&self, statement: &'static str, key: &str) -> Result<User, UserStoreError> {
        match self.db.query_one(statement, &[Param::Text(key)]).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                debug!("no matching user");
                Err(UserStoreError::NotFound)
            }
            Err(e) => {
                error!(error = %e, "user lookup failed");
                Err(UserStoreError::Persistence(e))
            }
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &mut NewUser) -> Result<(), UserStoreError> {
        if let Err(e) = user.validate() {
            warn!(field = e.field, reason = %e.reason, "rejected invalid user");
            return Err(e.into());
        }

        if let Err(e) = user.hash_password() {
            error!(error = %e, "unable to hash password");
            return Err(e);
        }

        let params = [
            Param::Text(&user.username),
            Param::Text(&user.email),
            Param::Text(&user.password),
            Param::OptionalText(user.first_name.as_deref()),
            Param::OptionalText(user.last_name.as_deref()),
        ];
        match self.db.execute(INSERT_USER, &params).await {
            Ok(_) => {
                info!("user created");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "unable to create user");
                Err(UserStoreError::Persistence(e))
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<User, UserStoreError> {
        self.find_one(SELECT_USER_BY_USERNAME, username).await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        self.find_one(SELECT_USER_BY_EMAIL, email).await
    }
}
