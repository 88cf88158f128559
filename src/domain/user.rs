//! User domain entity and related types.

use async_graphql::{InputObject, SimpleObject};
use uuid::Uuid;
use validator::Validate;

use super::validation::not_blank;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Stored hash, never the plaintext
    #[graphql(skip)]
    pub password: String,
}

/// User creation data transfer object
#[derive(Debug, Clone, Validate, InputObject)]
pub struct CreateUserInput {
    #[validate(custom(function = "not_blank", message = "Este campo não pode estar vazio"))]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "Este campo não pode estar vazio"),
        email(message = "Informe um e-mail válido")
    )]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: String,
}

/// User update data transfer object
///
/// Every field is optional; a supplied field must satisfy the same rules
/// as on creation.
#[derive(Debug, Clone, Default, Validate, InputObject)]
pub struct UpdateUserInput {
    #[validate(custom(function = "not_blank", message = "Este campo não pode estar vazio"))]
    pub name: Option<String>,

    #[validate(
        custom(function = "not_blank", message = "Este campo não pode estar vazio"),
        email(message = "Informe um e-mail válido")
    )]
    pub email: Option<String>,

    #[validate(custom(function = "not_blank", message = "Password is required"))]
    pub password: Option<String>,
}
