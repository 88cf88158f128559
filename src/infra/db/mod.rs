//! Database connection and schema management.
//!
//! The connection is opened once and shared behind an `Arc`; the user store
//! and the health check both read through the same handle.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Applied state of one schema migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Shared handle to the users database
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open the database and bring the users schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::open(config).await?;
        let applied = db.apply_pending().await?;
        tracing::info!(applied, "Database connected");
        Ok(db)
    }

    /// Open the database without touching the schema.
    pub async fn open(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self::from_connection(connection))
    }

    /// Wrap an already established connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Shared handle for repositories.
    pub fn connection(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.connection)
    }

    /// Apply pending migrations; returns how many ran.
    pub async fn apply_pending(&self) -> Result<usize, DbErr> {
        let pending = self
            .migration_status()
            .await?
            .into_iter()
            .filter(|m| !m.applied)
            .count();

        if pending > 0 {
            Migrator::up(&*self.connection, None).await?;
        }
        Ok(pending)
    }

    /// Roll back the most recent migration.
    pub async fn rollback_last(&self) -> Result<(), DbErr> {
        Migrator::down(&*self.connection, Some(1)).await
    }

    /// Drop every table and re-create the schema from scratch.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&*self.connection).await
    }

    /// Every known migration with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<MigrationState>, DbErr> {
        let migrations = Migrator::get_migration_with_status(&*self.connection).await?;

        Ok(migrations
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            })
            .collect())
    }

    /// Round-trip a trivial statement.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }
}
