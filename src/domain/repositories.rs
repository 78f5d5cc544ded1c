//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::DomainError;

/// A stored achievement record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: i32,
    pub description: String,
    pub points: i64,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an achievement
#[derive(Debug, Clone, PartialEq)]
pub struct NewAchievement {
    pub description: String,
    pub points: i64,
    pub user_id: i32,
    /// Defaults to the insertion time when absent
    pub created_at: Option<DateTime<Utc>>,
}

/// Registered user
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

/// Repository trait for Achievement entity
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Insert a single achievement
    async fn create(&self, input: NewAchievement) -> Result<Achievement, DomainError>;

    /// All achievements of a user, newest first (ties by id ascending)
    async fn find_by_owner(&self, user_id: i32) -> Result<Vec<Achievement>, DomainError>;

    /// Delete one achievement; `NotFound` when it does not exist or belongs to someone else
    async fn delete(&self, id: i32, user_id: i32) -> Result<(), DomainError>;

    /// Delete every achievement of a user, returning the number removed
    async fn delete_all(&self, user_id: i32) -> Result<u64, DomainError>;

    /// Delete the given achievements of a user, returning the number removed
    async fn delete_many(&self, user_id: i32, ids: &[i32]) -> Result<u64, DomainError>;

    /// Atomically delete `ids` and insert `replacements`
    async fn replace(
        &self,
        user_id: i32,
        ids: &[i32],
        replacements: Vec<NewAchievement>,
    ) -> Result<Vec<Achievement>, DomainError>;
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a user; `Conflict` when the username is taken
    async fn create(&self, username: String, password_hash: String) -> Result<User, DomainError>;

    /// All users, ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}

/// Repository trait for per-user category colors
#[async_trait]
pub trait GroupColorRepository: Send + Sync {
    /// Category name to color for one user
    async fn find_by_owner(&self, user_id: i32) -> Result<HashMap<String, String>, DomainError>;

    /// Insert or overwrite the color of a category
    async fn save(&self, user_id: i32, group_name: String, color: String)
    -> Result<(), DomainError>;
}
