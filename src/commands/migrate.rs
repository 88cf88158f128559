//! Migrate command - manual control over the users schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::open(&config).await?;

    match args.action {
        MigrateAction::Up => {
            let applied = db.apply_pending().await?;
            tracing::info!(applied, "Schema up to date");
        }
        MigrateAction::Down => {
            db.rollback_last().await?;
            tracing::info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let migrations = db.migration_status().await?;
            let pending = migrations.iter().filter(|m| !m.applied).count();

            for migration in &migrations {
                tracing::info!(
                    migration = %migration.name,
                    applied = migration.applied,
                    "Migration"
                );
            }
            tracing::info!(total = migrations.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping users schema and re-creating it");
            db.reset().await?;
            tracing::info!("Schema re-created");
        }
    }

    Ok(())
}
