//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Flash message cookie transport
//! - Page rendering
//! - Route definitions

pub mod flash;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

pub use flash::Flash;
pub use routes::create_router;
pub use state::AppState;
