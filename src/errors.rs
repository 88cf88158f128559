//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with conversion into GraphQL errors carrying a stable `code` extension.

use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

/// A single failing input field and the message reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    // Resource errors
    #[error("User not found")]
    NotFound,

    // Store did not produce the expected result
    #[error("{0}")]
    Internal(String),

    // Infrastructure errors surface with their own message
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        if let AppError::Database(e) = self {
            tracing::error!("Database error: {:?}", e);
        }

        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code().to_string());

            if let AppError::Validation(fields) = self {
                if let Ok(value) = async_graphql::to_value(fields) {
                    ext.set("fields", value);
                }
            }
        })
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_message_is_surfaced_verbatim() {
        let err = AppError::internal("Problem to create a user. Try Again");
        assert_eq!(err.to_string(), "Problem to create a user. Try Again");
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn database_error_keeps_its_own_message() {
        let err = AppError::from(sea_orm::DbErr::Custom("connection refused".to_string()));
        assert_eq!(
            err.to_string(),
            sea_orm::DbErr::Custom("connection refused".to_string()).to_string()
        );
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn validation_error_lists_every_field() {
        let err = AppError::Validation(vec![
            FieldError::new("email", "Informe um e-mail válido"),
            FieldError::new("name", "Este campo não pode estar vazio"),
        ]);

        let message = err.to_string();
        assert!(message.contains("email: Informe um e-mail válido"));
        assert!(message.contains("name: Este campo não pode estar vazio"));
    }

    #[test]
    fn graphql_error_carries_code_and_fields() {
        let err = AppError::Validation(vec![FieldError::new("password", "Password is required")])
            .extend();
        let json = serde_json::to_value(err.extensions.expect("extensions set"))
            .expect("extensions serialize");

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fields"][0]["field"], "password");
        assert_eq!(json["fields"][0]["message"], "Password is required");
    }

    #[test]
    fn none_maps_to_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
