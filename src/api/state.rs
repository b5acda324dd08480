//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{UserManager, UserService, UserValidator};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Admin form validator
    pub validator: Arc<UserValidator>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Service and validator share one repository over the connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));

        Self {
            user_service: Arc::new(UserManager::new(repo.clone())),
            validator: Arc::new(UserValidator::new(repo)),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        validator: Arc<UserValidator>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            validator,
            database,
        }
    }
}
