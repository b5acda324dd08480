//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// List all users
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Check whether any user other than `excluding` owns this email
    async fn email_in_use(&self, email: &str, excluding: Option<Uuid>) -> AppResult<bool>;

    /// Create a new user
    async fn create(&self, data: NewUser) -> AppResult<User>;

    /// Overwrite user fields
    async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn email_in_use(&self, email: &str, excluding: Option<Uuid>) -> AppResult<bool> {
        let mut query = UserEntity::find().filter(user::Column::Email.eq(email));

        if let Some(id) = excluding {
            query = query.filter(user::Column::Id.ne(id));
        }

        let result = query.one(&self.db).await.map_err(AppError::from)?;
        Ok(result.is_some())
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            name: Set(data.name),
            role: Set(data.role),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();

        active.name = Set(changes.name);
        active.email = Set(changes.email);
        active.role = Set(changes.role);
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
