//! Shared test fixtures: an in-memory repository and request helpers.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::Utc;
use uuid::Uuid;

use user_admin::api::handlers::user_routes;
use user_admin::api::{AppState, Flash};
use user_admin::domain::{NewUser, User, UserChanges};
use user_admin::errors::{AppError, AppResult};
use user_admin::infra::{Database, UserRepository};
use user_admin::services::{UserManager, UserValidator};

/// In-memory user store backing service and router tests.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<BTreeMap<Uuid, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pre-built user, returning its id.
    pub fn seed(&self, name: &str, email: &str, password_hash: &str, role: &str) -> Uuid {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        };
        let id = user.id;
        self.users.lock().unwrap().insert(id, user);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.all())
    }

    async fn email_in_use(&self, email: &str, excluding: Option<Uuid>) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|user| user.email == email && Some(user.id) != excluding))
    }

    async fn create(&self, data: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            name: data.name,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(AppError::NotFound)?;

        user.name = changes.name;
        user.email = changes.email;
        user.role = changes.role;
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}

/// Application state wired to the in-memory repository.
pub fn test_state(repo: Arc<MemoryUserRepository>) -> AppState {
    let repo: Arc<dyn UserRepository> = repo;
    AppState::new(
        Arc::new(UserManager::new(repo.clone())),
        Arc::new(UserValidator::new(repo)),
        Arc::new(Database::from_connection(
            sea_orm::DatabaseConnection::default(),
        )),
    )
}

/// Router mounting the admin user routes like the application does.
pub fn test_router(repo: Arc<MemoryUserRepository>) -> Router {
    Router::new()
        .nest("/admin/users", user_routes())
        .with_state(test_state(repo))
}

/// Build a form-encoded request.
pub fn form_request(method: &str, uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Build a bodyless request.
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Decode the flash set by a response, if any.
pub fn response_flash(response: &Response) -> Option<Flash> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let value = set_cookie
        .split(';')
        .next()?
        .strip_prefix("flash=")?
        .trim();
    if value.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(value).ok()?;
    serde_json::from_str(&decoded).ok()
}

/// Location header of a redirect response.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
