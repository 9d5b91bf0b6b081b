use async_trait::async_trait;
use sqlx::{
    postgres::PgArguments,
    query::{Query, QueryAs},
    PgPool, Postgres,
};

use crate::users::repo_types::User;

/// Positional value bound to a `$n` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param<'a> {
    Text(&'a str),
    OptionalText(Option<&'a str>),
}

/// Parameterized statement execution against the backing store.
///
/// Implemented for [`PgPool`]; tests substitute an in-memory handle.
#[async_trait]
pub trait StoreHandle: Send + Sync {
    /// Runs a statement and returns the number of affected rows.
    async fn execute(&self, statement: &'static str, params: &[Param<'_>]) -> Result<u64, sqlx::Error>;

    /// Runs a query expected to yield zero or one user row.
    async fn query_one(
        &self,
        statement: &'static str,
        params: &[Param<'_>],
    ) -> Result<Option<User>, sqlx::Error>;
}

fn bind_query<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[Param<'q>],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match *param {
            Param::Text(value) => query.bind(value),
            Param::OptionalText(value) => query.bind(value),
        };
    }
    query
}

fn bind_query_as<'q>(
    mut query: QueryAs<'q, Postgres, User, PgArguments>,
    params: &[Param<'q>],
) -> QueryAs<'q, Postgres, User, PgArguments> {
    for param in params {
        query = match *param {
            Param::Text(value) => query.bind(value),
            Param::OptionalText(value) => query.bind(value),
        };
    }
    query
}

#[async_trait]
impl StoreHandle for PgPool {
    async fn execute(&self, statement: &'static str, params: &[Param<'_>]) -> Result<u64, sqlx::Error> {
        let result = bind_query(sqlx::query(statement), params)
            .execute(self)
            .await?;
        Ok(result.rows_affected())
    }

    async fn query_one(
        &self,
        statement: &'static str,
        params: &[Param<'_>],
    ) -> Result<Option<User>, sqlx::Error> {
        bind_query_as(sqlx::query_as::<_, User>(statement), params)
            .fetch_optional(self)
            .await
    }
}
