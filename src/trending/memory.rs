use async_trait::async_trait;
use std::sync::Mutex;

use super::store::{CounterStore, TrendingError, TrendingResult};
use crate::schemas::{Movie, TrendingEntry};

/// Process-local counter store. Counts are lost on exit.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<TrendingEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entries(entries: Vec<TrendingEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn find_or_increment(&self, query: &str, movie: &Movie) -> TrendingResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| TrendingError::Backend("memory store poisoned".to_string()))?;

        match entries.iter_mut().find(|e| e.search_term == query) {
            Some(entry) => entry.count += 1,
            None => {
                let id = format!("mem-{}", entries.len() + 1);
                entries.push(TrendingEntry::first_search(id, query, movie));
            }
        }
        Ok(())
    }

    async fn list_top(&self, n: usize) -> TrendingResult<Vec<TrendingEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| TrendingError::Backend("memory store poisoned".to_string()))?;

        let mut ranked = entries.clone();
        // Stable sort keeps insertion order among ties
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        Ok(ranked)
    }
}
