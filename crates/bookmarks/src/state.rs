//! Shared application state.
//!
//! Cloned into every handler. Storage is reached through repository trait
//! objects so the router can be exercised against any backend.

use std::sync::Arc;

use bookmarks_core::storage::{BookmarkRepository, DumpRepository};

use crate::{
    config::Config,
    enrichment::{Enricher, HttpPageFetcher},
    storage::SqliteRepository,
};

#[derive(Clone)]
pub struct AppState {
    /// Bookmark CRUD and tag cells.
    pub bookmarks: Arc<dyn BookmarkRepository>,
    /// Dump export and restore.
    pub dumps: Arc<dyn DumpRepository>,
    /// Title extraction for new and re-pointed bookmarks.
    pub enricher: Arc<Enricher>,
}

impl AppState {
    /// Creates state backed by one SQLite repository for both traits.
    pub fn new(repository: SqliteRepository, enricher: Enricher) -> Self {
        let repository = Arc::new(repository);
        Self {
            bookmarks: repository.clone(),
            dumps: repository,
            enricher: Arc::new(enricher),
        }
    }

    /// Opens the configured database and builds the HTTP enricher.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repository = SqliteRepository::new(&config.database_path).await?;
        let fetcher = HttpPageFetcher::new(config.fetch_timeout())?;
        let enricher = Enricher::new(Arc::new(fetcher), config.retry_delay());

        tracing::info!(
            database = %repository.path().display(),
            fetch_timeout_s = config.fetch_timeout_seconds,
            retry_delay_ms = config.retry_delay_millis,
            "Initialized application state"
        );

        Ok(Self::new(repository, enricher))
    }
}
