//! Application state - Dependency injection container.
//!
//! Provides centralized access to the GraphQL schema and infrastructure.

use std::sync::Arc;

use crate::api::graphql::{build_schema, AppSchema};
use crate::config::Config;
use crate::domain::PasswordTransformer;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema (holds the user service)
    pub schema: AppSchema,
    /// Database connection
    pub database: Arc<Database>,
    /// Serve GraphiQL on `GET /graphql`
    pub playground: bool,
}

impl AppState {
    /// Wire repository, service and schema from a database and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let transformer = PasswordTransformer::new(config.password_hash_cost)?;
        let repo = Arc::new(UserStore::new(database.connection(), transformer));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(repo));

        Ok(Self::new(user_service, database, config.graphql_playground))
    }

    /// Create application state with a manually injected user service.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>, playground: bool) -> Self {
        Self {
            schema: build_schema(user_service),
            database,
            playground,
        }
    }
}
