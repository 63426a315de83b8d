//! Engine configuration
//!
//! Everything the host is allowed to tune lives here. Values are plain data:
//! the configuration layer (CLI flag, JSON override file) validates and
//! supplies them, the engine just reads them.

use serde::Deserialize;
use strum_macros::Display;

// --- Fixed analysis windows (not host-tunable) ---

/// Moving-average length for the raw volume series.
pub const VOLUME_MA_LEN: usize = 10;
/// How many smoothed-volume samples the percentile reference looks back over.
pub const VOLUME_PERCENTILE_WINDOW: usize = 1000;
/// Percentile used as the volume reference level.
pub const VOLUME_REFERENCE_PCT: f64 = 0.99;
/// Trailing window (bars, inclusive of the current bar) for swing detection.
pub const SWING_WINDOW: usize = 15;
/// Liquidity level assigned to zones below the medium threshold.
pub const LOW_LIQUIDITY_LEVEL: f64 = 1.0;

/// Settings for the zone registries
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ZoneSettings {
    // Combined cap across both sides; the oldest zone is evicted (one per
    // bar) once the count exceeds this.
    pub max_zones: usize,
    // Whether swings below the medium threshold still produce (Low) zones
    pub show_low_liquidity_zones: bool,
}

/// Settings for alert gating. Thresholds share the [1, 10] scale of the
/// normalized volume score.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    pub alert_on_medium: bool,
    pub alert_on_high: bool,
    pub med_threshold: f64,
    pub high_threshold: f64,
}

impl AlertSettings {
    /// The gate every enter/active/leave signal must pass: high-class zones
    /// alert when high alerts are on, medium-class zones when medium alerts
    /// are on. Levels below the medium threshold never alert.
    pub fn gated(&self, level: f64) -> bool {
        (level >= self.high_threshold && self.alert_on_high)
            || (level >= self.med_threshold && level < self.high_threshold && self.alert_on_medium)
    }
}

/// Settings for the trading-session gate. Windows are half-open
/// [start, end) minute-of-day pairs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub filter_by_trading_hours: bool,
    pub windows: [(u32, u32); 2],
}

/// Line style for the daily high/low levels. Cosmetic: carried through to
/// the rendering side untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Settings for the daily high/low tracker. Everything except `show` is
/// cosmetic passthrough.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DailyLevelSettings {
    pub show_daily_levels: bool,
    pub color: String,
    pub width: u8,
    pub style: LineStyle,
}

/// The Master Engine Configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub zones: ZoneSettings,
    pub alerts: AlertSettings,
    pub session: SessionSettings,
    pub daily: DailyLevelSettings,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            max_zones: 125,
            show_low_liquidity_zones: false,
        }
    }
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            alert_on_medium: true,
            alert_on_high: true,
            med_threshold: 4.0,
            high_threshold: 7.0,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            filter_by_trading_hours: false,
            // 13:45-17:00 and 19:00-23:00 UTC
            windows: [(825, 1020), (1140, 1380)],
        }
    }
}

impl Default for DailyLevelSettings {
    fn default() -> Self {
        Self {
            show_daily_levels: true,
            color: "#2962ff".to_string(),
            width: 1,
            style: LineStyle::Dotted,
        }
    }
}
