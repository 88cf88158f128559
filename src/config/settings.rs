//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_PASSWORD_HASH_COST, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MIN_PASSWORD_HASH_COST,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Work factor handed to the password transformer
    pub password_hash_cost: u32,
    /// Serve GraphiQL on `GET /graphql`
    pub graphql_playground: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("password_hash_cost", &self.password_hash_cost)
            .field("graphql_playground", &self.graphql_playground)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
            graphql_playground: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let password_hash_cost = env::var("PASSWORD_HASH_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_PASSWORD_HASH_COST);

        if password_hash_cost < MIN_PASSWORD_HASH_COST {
            tracing::warn!(
                cost = password_hash_cost,
                "PASSWORD_HASH_COST below minimum, using {}",
                MIN_PASSWORD_HASH_COST
            );
        }

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            password_hash_cost: password_hash_cost.max(MIN_PASSWORD_HASH_COST),
            graphql_playground: env::var("GRAPHQL_PLAYGROUND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_database_url() {
        let config = Config::default();
        let printed = format!("{:?}", config);

        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains("postgres://"));
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            ..Config::default()
        };

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
