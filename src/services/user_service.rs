//! User Service - registration and credential checks

use crate::auth::{hash_password, verify_password};
use crate::domain::{DomainError, User, UserRepository};

/// Register a new user with a hashed password
pub async fn register_user(
    repo: &dyn UserRepository,
    username: &str,
    password: &str,
) -> Result<User, DomainError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(DomainError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let password_hash = hash_password(password).map_err(DomainError::Internal)?;
    let user = repo.create(username.to_string(), password_hash).await?;
    tracing::info!("Registered user {} (id {})", user.username, user.id);

    Ok(user)
}

/// The matching user, or `None` for an unknown name or wrong password
pub async fn verify_user(
    repo: &dyn UserRepository,
    username: &str,
    password: &str,
) -> Result<Option<User>, DomainError> {
    let Some(user) = repo.find_by_username(username.trim()).await? else {
        tracing::warn!("User not found: {}", username);
        return Ok(None);
    };

    match verify_password(password, &user.password_hash) {
        Ok(true) => Ok(Some(user)),
        Ok(false) => {
            tracing::warn!("Password verification failed for user: {}", user.username);
            Ok(None)
        }
        Err(e) => {
            tracing::error!("Stored hash for {} is unreadable: {}", user.username, e);
            Ok(None)
        }
    }
}
