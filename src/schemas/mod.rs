pub mod movie;
pub mod trending;

pub use movie::{CatalogPage, Movie};
pub use trending::TrendingEntry;
