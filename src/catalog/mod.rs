pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{CatalogClient, TmdbClient};
pub use endpoint::Endpoint;
pub use error::{CatalogError, CatalogResult};
