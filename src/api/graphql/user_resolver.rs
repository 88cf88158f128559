//! User resolvers - map GraphQL operations onto the user service.
//!
//! Inputs are validated before the service is called; service errors are
//! surfaced unchanged with their `code` extension.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use crate::domain::{validate_input, CreateUserInput, UpdateUserInput, User};
use crate::errors::AppResult;
use crate::services::UserService;

fn user_service<'a>(ctx: &'a Context<'_>) -> Result<&'a Arc<dyn UserService>> {
    ctx.data::<Arc<dyn UserService>>()
}

fn surface<T>(result: AppResult<T>) -> Result<T> {
    result.map_err(|e| e.extend())
}

/// User queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Every stored user
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        surface(user_service(ctx)?.find_all_users().await)
    }

    /// A single user by id
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<User> {
        surface(user_service(ctx)?.find_user_by_id(id).await)
    }
}

/// User mutations
#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> Result<User> {
        surface(validate_input(&data))?;
        surface(user_service(ctx)?.create_user(data).await)
    }

    /// Replace only the supplied fields
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        data: UpdateUserInput,
    ) -> Result<User> {
        surface(validate_input(&data))?;
        surface(user_service(ctx)?.update_user(id, data).await)
    }

    /// `false` when the store reported nothing removed
    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        surface(user_service(ctx)?.delete_user(id).await)
    }
}
