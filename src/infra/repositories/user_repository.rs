//! User repository - the six storage primitives the user service relies on.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUserInput, PasswordTransformer, UpdateUserInput, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All stored users, in store order
    async fn find(&self) -> AppResult<Vec<User>>;

    /// User with the given id, if any
    async fn find_one(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Build an unsaved user with a fresh id and the password in stored form
    fn create(&self, input: CreateUserInput) -> AppResult<User>;

    /// Persist a new user; `None` when no row was written
    async fn save(&self, user: User) -> AppResult<Option<User>>;

    /// Write only the supplied fields; returns rows affected
    async fn update(&self, id: Uuid, changes: UpdateUserInput) -> AppResult<u64>;

    /// Remove the user; returns rows affected
    async fn delete(&self, id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: Arc<DatabaseConnection>,
    transformer: PasswordTransformer,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>, transformer: PasswordTransformer) -> Self {
        Self {
            db: db.into(),
            transformer,
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&*self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_one(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(User::from))
    }

    fn create(&self, input: CreateUserInput) -> AppResult<User> {
        Ok(User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password: self.transformer.to_stored(&input.password)?,
        })
    }

    async fn save(&self, user: User) -> AppResult<Option<User>> {
        // An id collision writes nothing instead of failing
        let rows = UserEntity::insert(ActiveModel::from(user.clone()))
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        if rows == 0 {
            tracing::warn!(user_id = %user.id, "Insert wrote no rows");
            return Ok(None);
        }

        Ok(Some(user))
    }

    async fn update(&self, id: Uuid, changes: UpdateUserInput) -> AppResult<u64> {
        let active = ActiveModel::from_changes(changes, &self.transformer)?;
        if !active.is_changed() {
            return Ok(0);
        }

        let result = UserEntity::update_many()
            .set(active)
            .filter(user::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use crate::errors::AppError;
    use crate::infra::repositories::entities::UserModel;

    fn transformer() -> PasswordTransformer {
        PasswordTransformer::new(1).unwrap()
    }

    fn model(name: &str) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            password: "$argon2id$stored".to_string(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_find_returns_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("Ana"), model("Bruno")]])
            .into_connection();
        let store = UserStore::new(db, transformer());

        let users = store.find().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ana");
        assert_eq!(users[1].name, "Bruno");
    }

    #[tokio::test]
    async fn test_find_one_reads_hash_verbatim() {
        let row = model("Ana");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let store = UserStore::new(db, transformer());

        let user = store.find_one(row.id).await.unwrap().unwrap();

        assert_eq!(user.password, row.password);
    }

    #[tokio::test]
    async fn test_find_one_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserModel>::new()])
            .into_connection();
        let store = UserStore::new(db, transformer());

        assert!(store.find_one(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_hashes_without_touching_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let t = transformer();
        let store = UserStore::new(db, t.clone());

        let user = store
            .create(CreateUserInput {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "secret".to_string(),
            })
            .unwrap();

        assert_eq!(user.name, "Ana");
        assert_ne!(user.password, "secret");
        assert!(t.verify("secret", &user.password));
    }

    #[tokio::test]
    async fn test_save_returns_user_when_row_written() {
        let user = User::from(model("Ana"));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();
        let store = UserStore::new(db, transformer());

        let saved = store.save(user.clone()).await.unwrap();

        assert_eq!(saved, Some(user));
    }

    #[tokio::test]
    async fn test_save_returns_none_when_nothing_written() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();
        let store = UserStore::new(db, transformer());

        let saved = store.save(User::from(model("Ana"))).await.unwrap();

        assert!(saved.is_none());
    }

    #[tokio::test]
    async fn test_update_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();
        let store = UserStore::new(db, transformer());

        let changes = UpdateUserInput {
            name: Some("Novo Nome".to_string()),
            ..Default::default()
        };

        assert_eq!(store.update(Uuid::new_v4(), changes).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_update_skips_store() {
        // No exec result queued: touching the store would error
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = UserStore::new(db, transformer());

        let rows = store
            .update(Uuid::new_v4(), UpdateUserInput::default())
            .await
            .unwrap();

        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let store = UserStore::new(db, transformer());

        assert_eq!(store.delete(Uuid::new_v4()).await.unwrap(), 1);
        assert_eq!(store.delete(Uuid::new_v4()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_errors_propagate_unchanged() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection lost".to_string())])
            .into_connection();
        let store = UserStore::new(db, transformer());

        let err = store.find().await.unwrap_err();

        assert!(matches!(err, AppError::Database(DbErr::Custom(ref m)) if m == "connection lost"));
    }
}
