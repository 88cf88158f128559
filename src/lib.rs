//! User GraphQL API - user management backend.
//!
//! Create, list, find, update and delete users through a GraphQL API,
//! backed by PostgreSQL, with passwords hashed before they are stored.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, input DTOs, password transformer, validation
//! - **services**: User use cases
//! - **infra**: Database, migrations and the user repository
//! - **api**: GraphQL schema, resolvers and HTTP routes
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
pub use domain::{CreateUserInput, PasswordTransformer, UpdateUserInput, User};
pub use errors::{AppError, AppResult};
