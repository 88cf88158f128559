//! API layer - HTTP transport and GraphQL resolvers
//!
//! This module contains all request-facing concerns:
//! - GraphQL schema and resolvers
//! - Route definitions
//! - Shared application state

pub mod graphql;
pub mod routes;
pub mod state;

pub use graphql::{build_schema, AppSchema};
pub use routes::create_router;
pub use state::AppState;
