//! User service - Handles user-related business logic.
//!
//! Stateless: every operation is a one-shot unit of work against the
//! repository.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MSG_CREATE_FAILED;
use crate::domain::{CreateUserInput, UpdateUserInput, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// Inputs are expected to be validated before any of these run.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users (store order)
    async fn find_all_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<User>;

    /// Hash the password, persist and return the stored user
    async fn create_user(&self, input: CreateUserInput) -> AppResult<User>;

    /// Apply the supplied fields to an existing user
    async fn update_user(&self, id: Uuid, input: UpdateUserInput) -> AppResult<User>;

    /// Delete an existing user; `false` when the store removed nothing
    async fn delete_user(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.repo.find().await
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_one(id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %id, "User not found");
            AppError::NotFound
        })
    }

    async fn create_user(&self, input: CreateUserInput) -> AppResult<User> {
        let user = self.repo.create(input)?;

        let saved = self.repo.save(user).await?.ok_or_else(|| {
            tracing::warn!("Store did not persist new user");
            AppError::internal(MSG_CREATE_FAILED)
        })?;

        tracing::info!(user_id = %saved.id, "User created");
        Ok(saved)
    }

    async fn update_user(&self, id: Uuid, input: UpdateUserInput) -> AppResult<User> {
        self.find_user_by_id(id).await?;

        let rows = self.repo.update(id, input).await?;
        tracing::debug!(user_id = %id, rows, "User updated");

        // Re-read so the returned password is the stored hash
        self.repo.find_one(id).await?.ok_or_not_found()
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<bool> {
        self.find_user_by_id(id).await?;

        let deleted = self.repo.delete(id).await? > 0;
        if deleted {
            tracing::info!(user_id = %id, "User deleted");
        } else {
            tracing::warn!(user_id = %id, "Delete removed no rows");
        }

        Ok(deleted)
    }
}
