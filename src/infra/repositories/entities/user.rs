//! User database entity for SeaORM.
//!
//! The conversions here are the persistence mapping layer: they run the
//! password transformer's write half on the way in and its read half on the
//! way out.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::domain::{PasswordTransformer, UpdateUserInput, User};
use crate::errors::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 hash of the last password supplied
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            password: PasswordTransformer::from_stored(model.password),
        }
    }
}

/// Convert a domain entity (password already stored form) to an insertable row
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
        }
    }
}

impl ActiveModel {
    /// Build a partial row holding only the supplied fields.
    ///
    /// A supplied password goes through the transformer; omitted fields stay
    /// `NotSet` so the update leaves their columns untouched.
    pub fn from_changes(changes: UpdateUserInput, transformer: &PasswordTransformer) -> AppResult<Self> {
        let password = match changes.password {
            Some(plain) => Set(transformer.to_stored(&plain)?),
            None => NotSet,
        };

        Ok(ActiveModel {
            id: NotSet,
            name: changes.name.map_or(NotSet, Set),
            email: changes.email.map_or(NotSet, Set),
            password,
        })
    }
}
