//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostStore;

#[cfg(feature = "mongo")]
use blog_infra::MongoPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate store backend.
    pub async fn new(database_url: Option<&str>) -> Self {
        #[cfg(feature = "mongo")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(url) = database_url {
                match MongoPostStore::connect(url).await {
                    Ok(store) => Arc::new(store),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to document store: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostStore::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "mongo"))]
        let posts: Arc<dyn PostRepository> = {
            if database_url.is_some() {
                tracing::warn!(
                    "Built without the mongo feature - ignoring the connection string and \
                     using the in-memory store"
                );
            }
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }

    /// Wrap an existing store. Used by tests to substitute a scoped instance.
    pub fn with_store(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
