//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Document store connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::load(env::var("DATABASE_URL").ok())
    }

    /// Load configuration for the test environment. The store connection
    /// string comes from `TEST_DATABASE_URL` so tests never touch the
    /// production store.
    pub fn from_test_env() -> Self {
        Self::load(env::var("TEST_DATABASE_URL").ok())
    }

    fn load(database_url: Option<String>) -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url,
        }
    }
}
