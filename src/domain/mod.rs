//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod password;
pub mod user;
pub mod validation;

pub use password::PasswordTransformer;
pub use user::{CreateUserInput, UpdateUserInput, User};
pub use validation::validate_input;
