use std::collections::VecDeque;

use crate::config::SWING_WINDOW;
use crate::domain::Candle;
use crate::utils::maths_utils::{get_max, get_min};

/// Which pivots were confirmed by the current bar. Both can be set at once
/// when the previous bar printed both extremes of its window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwingMarks {
    pub swing_high: bool,
    pub swing_low: bool,
}

/// Identifies, one bar after the fact, that a local high/low pivot formed.
///
/// A swing high is confirmed on bar `i` when the previous bar was the
/// maximum of its own trailing window AND the current bar has pulled back
/// below the running maximum. The pivot bar is always `i-1`; callers keep
/// that bar around if they need its geometry.
#[derive(Debug, Clone)]
pub struct SwingDetector {
    highs: VecDeque<f64>,
    lows: VecDeque<f64>,
    prev_high: Option<f64>,
    prev_low: Option<f64>,
    prev_rolling_max: Option<f64>,
    prev_rolling_min: Option<f64>,
}

impl Default for SwingDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SwingDetector {
    pub fn new() -> Self {
        Self {
            highs: VecDeque::with_capacity(SWING_WINDOW),
            lows: VecDeque::with_capacity(SWING_WINDOW),
            prev_high: None,
            prev_low: None,
            prev_rolling_max: None,
            prev_rolling_min: None,
        }
    }

    pub fn advance(&mut self, candle: &Candle) -> SwingMarks {
        self.highs.push_back(candle.high_price);
        self.lows.push_back(candle.low_price);
        if self.highs.len() > SWING_WINDOW {
            self.highs.pop_front();
            self.lows.pop_front();
        }

        // Rolling extremes over the trailing window, current bar included.
        let rolling_max = get_max(self.highs.make_contiguous());
        let rolling_min = get_min(self.lows.make_contiguous());

        // The equality check is exact on purpose: the rolling max is one of
        // the stored highs, so a peak compares bit-identical to itself.
        let swing_high = matches!(
            (self.prev_high, self.prev_rolling_max),
            (Some(ph), Some(pm)) if pm == ph
        ) && candle.high_price < rolling_max;

        let swing_low = matches!(
            (self.prev_low, self.prev_rolling_min),
            (Some(pl), Some(pm)) if pm == pl
        ) && candle.low_price > rolling_min;

        self.prev_high = Some(candle.high_price);
        self.prev_low = Some(candle.low_price);
        self.prev_rolling_max = Some(rolling_max);
        self.prev_rolling_min = Some(rolling_min);

        SwingMarks {
            swing_high,
            swing_low,
        }
    }
}
