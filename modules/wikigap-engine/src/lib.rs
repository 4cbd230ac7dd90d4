pub mod discover;
mod enrichment;
pub mod observer;
pub mod ranking;
pub mod suggest;
pub mod testing;
pub mod traits;
mod traversal;

pub use discover::{Discoverer, DiscoveryStats};
pub use observer::{NullObserver, RunObserver};
pub use suggest::CategorySuggester;
