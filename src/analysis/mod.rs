// Per-bar analysis components feeding the engine
pub mod daily;
pub mod session;
pub mod swing;
pub mod volume;
pub mod zone_factory;

// Re-export commonly used types
pub use daily::{DailyEvent, DailyExtremeTracker};
pub use session::session_active;
pub use swing::{SwingDetector, SwingMarks};
pub use volume::VolumeNormalizer;
pub use zone_factory::propose_zone;
