mod error;
mod handle;
mod password;
mod repo;
mod repo_types;
mod validate;

pub use error::UserStoreError;
pub use handle::{Param, StoreHandle};
pub use password::{hash_password, verify_password};
pub use repo::{
    UserRepository, UserStore, INSERT_USER, SELECT_USER_BY_EMAIL, SELECT_USER_BY_USERNAME,
};
pub use repo_types::{NewUser, User};
pub use validate::ValidationError;
