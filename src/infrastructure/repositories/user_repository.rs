//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::domain::{DomainError, User, UserRepository};
use crate::models::user::{self, ActiveModel, Entity as UserEntity};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<user::Model> for User {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            username: u.username,
            password_hash: u.password_hash,
            created_at: u.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(user.map(User::from))
    }

    async fn create(&self, username: String, password_hash: String) -> Result<User, DomainError> {
        let user = ActiveModel {
            username: Set(username.clone()),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        // UNIQUE(username) is the only existence check
        let result = user.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DomainError::Conflict(format!("User '{}' already exists", username))
            }
            _ => DomainError::from(e),
        })?;

        Ok(User::from(result))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }
}
