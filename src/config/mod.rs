//! Configuration module for the pool-sentry engine.

pub mod engine;

// Re-export commonly used items
pub use engine::{
    AlertSettings, DailyLevelSettings, EngineConfig, LineStyle, SessionSettings, ZoneSettings,
    LOW_LIQUIDITY_LEVEL, SWING_WINDOW, VOLUME_MA_LEN, VOLUME_PERCENTILE_WINDOW,
    VOLUME_REFERENCE_PCT,
};
