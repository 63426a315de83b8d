use serde::{Deserialize, Serialize};

// Define the Candle struct with all its properties.
// One fully-closed OHLCV bar; the engine never mutates a candle after it arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,

    pub base_volume: f64,

    /// Open time of the bar, milliseconds since the Unix epoch (UTC).
    pub timestamp_ms: i64,
}

// Implement methods for the Candle struct
impl Candle {
    // A constructor for convenience
    pub fn new(
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        base_volume: f64,
        timestamp_ms: i64,
    ) -> Self {
        Candle {
            open_price,
            high_price,
            low_price,
            close_price,
            base_volume,
            timestamp_ms,
        }
    }

    /// Full high-to-low span of the candle.
    pub fn range(&self) -> f64 {
        self.high_price - self.low_price
    }

    /// Half the high-to-low span. Pool geometry hangs off this: a zone
    /// extends one half-range beyond the pivot extreme.
    pub fn half_range(&self) -> f64 {
        self.range() / 2.0
    }
}
