pub mod controller;
pub mod search_service;
pub mod timer;
pub mod trending_service;

#[cfg(test)]
mod controller_test;

pub use controller::SearchController;
pub use search_service::SearchService;
pub use trending_service::TrendingService;
