//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
///
/// The role field is free text: validation leaves it unconstrained and
/// it is stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to persist a new user (password already hashed)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Field overwrites applied by an update.
///
/// Name, email and role always replace the stored values; the password
/// hash replaces the stored credential only when present.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: Option<String>,
}
