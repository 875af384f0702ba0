pub mod appwrite;
pub mod memory;
pub mod store;

pub use appwrite::AppwriteStore;
pub use memory::MemoryStore;
pub use store::{CounterStore, TrendingError, TrendingResult};
