//! User service - Handles user-related business logic.
//!
//! Orchestrates password hashing and repository access for the admin
//! CRUD operations. Input is expected to have passed the validator.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::user_validator::UserFields;
use crate::domain::{NewUser, Password, User, UserChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user from validated fields
    async fn create_user(&self, fields: UserFields) -> AppResult<User>;

    /// Overwrite a user's fields; the credential changes only when a
    /// new password was supplied
    async fn update_user(&self, id: Uuid, fields: UserFields) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, fields: UserFields) -> AppResult<User> {
        let plain = fields
            .password
            .as_deref()
            .ok_or_else(|| AppError::internal("password missing for user creation"))?;
        let password_hash = Password::new(plain)?.into_string();

        self.repo
            .create(NewUser {
                name: fields.name,
                email: fields.email,
                password_hash,
                role: fields.role,
            })
            .await
    }

    async fn update_user(&self, id: Uuid, fields: UserFields) -> AppResult<User> {
        let password_hash = match fields.password.as_deref() {
            Some(plain) => Some(Password::new(plain)?.into_string()),
            None => None,
        };

        self.repo
            .update(
                id,
                UserChanges {
                    name: fields.name,
                    email: fields.email,
                    role: fields.role,
                    password_hash,
                },
            )
            .await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
