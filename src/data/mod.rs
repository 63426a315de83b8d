// Feed acquisition for the engine
pub mod feed;

// Re-export commonly used types
pub use feed::{load_engine_config, CandleFeed};
