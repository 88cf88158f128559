//! GraphQL schema
//!
//! Query and mutation roots are merged from per-entity resolvers.

mod user_resolver;

use std::sync::Arc;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::services::UserService;

pub use user_resolver::{UserMutation, UserQuery};

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation);

/// Executable schema type
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the user service injected as context data.
pub fn build_schema(user_service: Arc<dyn UserService>) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(user_service)
        .finish()
}
