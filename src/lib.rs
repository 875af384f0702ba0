pub mod catalog;
pub mod config;
pub mod formatters;
pub mod interactive;
pub mod logging;
pub mod schemas;
pub mod trending;

#[cfg(test)]
mod test_server;

pub use catalog::{CatalogClient, CatalogError, Endpoint, TmdbClient};
pub use config::{AppConfig, ConfigArgs};
pub use interactive::{InteractiveSearch, application::SearchController};
pub use schemas::{CatalogPage, Movie, TrendingEntry};
pub use trending::{AppwriteStore, CounterStore, MemoryStore};
