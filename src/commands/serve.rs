//! Serve command - runs the GraphQL API over HTTP.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, GRAPHQL_PATH};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let config = args.apply(config);

    let db = Arc::new(Database::connect(&config).await?);
    let app = create_router(AppState::from_config(db, &config)?);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(
        %addr,
        playground = config.graphql_playground,
        "GraphQL endpoint on http://{}{}",
        addr,
        GRAPHQL_PATH
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}
