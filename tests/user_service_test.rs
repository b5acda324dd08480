//! User service unit tests against the in-memory repository.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::MemoryUserRepository;
use user_admin::domain::Password;
use user_admin::errors::AppError;
use user_admin::services::{UserFields, UserManager, UserService};

fn service(repo: &Arc<MemoryUserRepository>) -> UserManager {
    UserManager::new(repo.clone())
}

fn fields(name: &str, email: &str, password: Option<&str>, role: &str) -> UserFields {
    UserFields {
        name: name.to_string(),
        email: email.to_string(),
        password: password.map(str::to_string),
        role: role.to_string(),
    }
}

#[tokio::test]
async fn create_user_stores_submitted_fields_with_hashed_password() {
    let repo = Arc::new(MemoryUserRepository::new());

    let user = service(&repo)
        .create_user(fields("Alice", "a@x.com", Some("longenough"), "admin"))
        .await
        .unwrap();

    let stored = repo.get(user.id).unwrap();
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(stored.role, "admin");
    // The plaintext never reaches the store
    assert_ne!(stored.password_hash, "longenough");
    assert!(Password::from_hash(stored.password_hash).verify("longenough"));
}

#[tokio::test]
async fn create_user_without_password_is_an_internal_error() {
    let repo = Arc::new(MemoryUserRepository::new());

    let result = service(&repo)
        .create_user(fields("Alice", "a@x.com", None, "admin"))
        .await;

    assert!(matches!(result, Err(AppError::Internal(_))));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn update_user_overwrites_profile_fields() {
    let repo = Arc::new(MemoryUserRepository::new());
    let id = repo.seed("Alice", "a@x.com", "hashed", "user");

    service(&repo)
        .update_user(id, fields("Alicia", "alicia@x.com", None, "admin"))
        .await
        .unwrap();

    let stored = repo.get(id).unwrap();
    assert_eq!(stored.name, "Alicia");
    assert_eq!(stored.email, "alicia@x.com");
    assert_eq!(stored.role, "admin");
}

#[tokio::test]
async fn update_without_password_keeps_stored_credential() {
    let repo = Arc::new(MemoryUserRepository::new());
    let original_hash = Password::new("longenough").unwrap().into_string();
    let id = repo.seed("Alice", "a@x.com", &original_hash, "user");

    service(&repo)
        .update_user(id, fields("Alice", "a@x.com", None, "user"))
        .await
        .unwrap();

    assert_eq!(repo.get(id).unwrap().password_hash, original_hash);
}

#[tokio::test]
async fn update_with_password_replaces_stored_credential() {
    let repo = Arc::new(MemoryUserRepository::new());
    let original_hash = Password::new("longenough").unwrap().into_string();
    let id = repo.seed("Alice", "a@x.com", &original_hash, "user");

    service(&repo)
        .update_user(id, fields("Alice", "a@x.com", Some("evenlonger"), "user"))
        .await
        .unwrap();

    let stored = repo.get(id).unwrap();
    assert_ne!(stored.password_hash, original_hash);
    assert!(Password::from_hash(stored.password_hash).verify("evenlonger"));
}

#[tokio::test]
async fn update_unknown_user_is_not_found() {
    let repo = Arc::new(MemoryUserRepository::new());

    let result = service(&repo)
        .update_user(Uuid::new_v4(), fields("Alice", "a@x.com", None, "user"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn get_user_returns_record_or_not_found() {
    let repo = Arc::new(MemoryUserRepository::new());
    let id = repo.seed("Alice", "a@x.com", "hashed", "user");

    let user = service(&repo).get_user(id).await.unwrap();
    assert_eq!(user.id, id);

    let missing = service(&repo).get_user(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_user_removes_record() {
    let repo = Arc::new(MemoryUserRepository::new());
    let id = repo.seed("Alice", "a@x.com", "hashed", "user");

    service(&repo).delete_user(id).await.unwrap();

    assert_eq!(repo.get(id), None);

    let again = service(&repo).delete_user(id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
}

#[tokio::test]
async fn list_users_returns_all_records() {
    let repo = Arc::new(MemoryUserRepository::new());
    repo.seed("Alice", "a@x.com", "hashed", "user");
    repo.seed("Bob", "b@x.com", "hashed", "admin");

    let users = service(&repo).list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}
