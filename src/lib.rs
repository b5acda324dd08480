//! User Admin - administrative user management service
//!
//! A small web application exposing the admin CRUD surface for user
//! accounts: list, create, edit, update and delete, with a validation
//! layer enforcing field shape and email uniqueness.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases, input validation
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, flash messages, routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult, FieldErrors};
