//! Persistent label cache
//!
//! Maps a normalized feedback key to the label previously obtained for it.
//! Reads run concurrently, writes are serialized, and the durable store is
//! a flat, human-readable JSON object.

pub mod manager;
pub mod types;


pub use manager::LabelCache;
pub use types::{AtomicCacheStats, CacheEntry, CacheStats};
