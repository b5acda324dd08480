//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod user_service;
mod user_validator;

pub use user_service::{UserManager, UserService};
pub use user_validator::{messages, UserFields, UserInput, UserValidator, ValidationMode};
