use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

/// Identity of the feed being analysed: one instrument on one timeframe.
/// Each engine instance owns exactly one of these; nothing is shared across
/// (ticker, interval) pairs.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
pub struct Instrument {
    pub ticker: String,
    pub interval_ms: i64,
}

impl Instrument {
    pub fn new(ticker: impl Into<String>, interval_ms: i64) -> Self {
        Self {
            ticker: ticker.into(),
            interval_ms,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} @ {}",
            self.ticker,
            TimeUtils::interval_to_string(self.interval_ms)
        )
    }
}
