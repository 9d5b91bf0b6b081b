//! User data access for the auth service: account creation and lookup by
//! username or email over PostgreSQL.

pub mod config;
pub mod state;
pub mod telemetry;
pub mod users;

pub use state::{AppState, Repositories};
pub use users::{NewUser, User, UserRepository, UserStore, UserStoreError};
