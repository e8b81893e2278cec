//! Port traits for infrastructure boundaries.
//!
//! The repository port is the only abstraction in this service. It
//! exists so handlers can be tested against a mock and so the Neo4j
//! adapter could be swapped for another store.

use async_trait::async_trait;

use crate::domain::{User, UserInput};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("user not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(String),
}

impl RepoError {
    pub fn database(op: &str, err: impl std::fmt::Display) -> Self {
        Self::Database(format!("{op}: {err}"))
    }
}

/// Repository for User operations.
///
/// Every method runs exactly one query in one managed transaction;
/// the driver acquires and releases a pooled session per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Create a user; the store assigns the id.
    async fn create(&self, input: UserInput) -> Result<User, RepoError>;

    /// Fetch a user by id.
    async fn get(&self, id: i64) -> Result<User, RepoError>;

    /// List all users ordered by name ascending.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Overwrite name/email/age of an existing user.
    async fn update(&self, id: i64, input: UserInput) -> Result<User, RepoError>;

    /// Delete a user by id.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
