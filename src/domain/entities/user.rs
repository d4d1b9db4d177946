//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema. Users are owned by the
//! identity system; this service only reads them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user account that can hold enrollments.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - login: VARCHAR(50) NOT NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key
    pub id: i64,

    /// Login identifier (unique), the `sub` claim of access tokens
    pub login: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: i64, login: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            created_at: Utc::now(),
        }
    }
}

/// Directory of users, looked up by login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their login identifier.
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AppError>;
}
