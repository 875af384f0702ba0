use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{TrendingBackend, TrendingConfig};
use crate::schemas::{Movie, TrendingEntry};
use crate::trending::{AppwriteStore, CounterStore, MemoryStore};

/// Reads and bumps the search counters. Store failures never reach the
/// search flow; they are logged and swallowed here.
pub struct TrendingService {
    store: Arc<dyn CounterStore>,
    limit: usize,
}

impl TrendingService {
    pub fn new(store: Arc<dyn CounterStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn from_config(config: &TrendingConfig) -> Result<Self> {
        let store: Arc<dyn CounterStore> = match &config.backend {
            TrendingBackend::Memory => Arc::new(MemoryStore::new()),
            TrendingBackend::Appwrite(appwrite) => Arc::new(
                AppwriteStore::new(appwrite).context("Failed to create Appwrite counter store")?,
            ),
        };
        Ok(Self::new(store, config.limit))
    }

    /// Top entries, or `None` when the store could not be read.
    pub async fn load(&self) -> Option<Vec<TrendingEntry>> {
        match self.store.list_top(self.limit).await {
            Ok(entries) => {
                info!(count = entries.len(), "trending loaded");
                Some(entries)
            }
            Err(e) => {
                warn!(error = %e, "failed to load trending searches");
                None
            }
        }
    }

    pub async fn report(&self, query: &str, movie: &Movie) {
        match self.store.find_or_increment(query, movie).await {
            Ok(()) => info!(query, movie_id = movie.id, "search counted"),
            Err(e) => warn!(query, error = %e, "failed to record search"),
        }
    }
}
