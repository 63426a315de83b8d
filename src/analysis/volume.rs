use std::collections::VecDeque;

use crate::config::{VOLUME_MA_LEN, VOLUME_PERCENTILE_WINDOW, VOLUME_REFERENCE_PCT};
use crate::utils::maths_utils::nearest_rank_percentile;

/// Converts raw per-bar volume into a bounded [0, 10] strength score.
///
/// The pipeline per bar: 10-bar moving average of volume, divided by 10,
/// then measured against the 99th percentile of the last 1000 such samples.
/// A bar trading at the percentile reference scores 5; anything past twice
/// the reference saturates at 10.
///
/// Scores always lag the feed by one bar: the score consumed on bar `i` is
/// the one computed after bar `i-1` closed. `advance` makes that lag an
/// explicit part of the API rather than an indexing accident.
#[derive(Debug, Clone)]
pub struct VolumeNormalizer {
    /// Raw volumes feeding the moving average (at most `VOLUME_MA_LEN`).
    recent_volumes: VecDeque<f64>,
    /// Smoothed samples feeding the percentile reference (at most
    /// `VOLUME_PERCENTILE_WINDOW`).
    samples: VecDeque<f64>,
    /// Score computed through the most recently observed bar.
    current_score: f64,
}

impl Default for VolumeNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeNormalizer {
    pub fn new() -> Self {
        Self {
            recent_volumes: VecDeque::with_capacity(VOLUME_MA_LEN),
            samples: VecDeque::with_capacity(VOLUME_PERCENTILE_WINDOW),
            current_score: 0.0,
        }
    }

    /// Feed the just-closed bar's volume; returns the score that was in
    /// effect BEFORE this bar arrived. Zone creation on this bar consumes
    /// exactly that returned value.
    pub fn advance(&mut self, volume: f64) -> f64 {
        let lagged_score = self.current_score;

        self.recent_volumes.push_back(volume);
        if self.recent_volumes.len() > VOLUME_MA_LEN {
            self.recent_volumes.pop_front();
        }
        // Warm-up: average over the bars available so far.
        let ma: f64 =
            self.recent_volumes.iter().sum::<f64>() / self.recent_volumes.len() as f64;
        let vol = ma / VOLUME_MA_LEN as f64;

        self.samples.push_back(vol);
        if self.samples.len() > VOLUME_PERCENTILE_WINDOW {
            self.samples.pop_front();
        }

        // Recomputing the percentile from scratch each bar is fine at this
        // window size; a rolling order-statistics structure would have to
        // reproduce these exact values.
        let reference =
            nearest_rank_percentile(self.samples.make_contiguous(), VOLUME_REFERENCE_PCT);

        self.current_score = if reference > 0.0 {
            (vol / reference * 5.0).min(10.0)
        } else {
            // Empty or all-zero window: no reference, no strength.
            0.0
        };

        lagged_score
    }

    /// Score through the latest observed bar (what the NEXT bar will see).
    pub fn current_score(&self) -> f64 {
        self.current_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bar_sees_zero_score() {
        let mut norm = VolumeNormalizer::new();
        assert_eq!(norm.advance(5_000.0), 0.0, "nothing observed before bar 0");
    }

    #[test]
    fn score_lags_by_exactly_one_bar() {
        let mut norm = VolumeNormalizer::new();
        norm.advance(100.0);
        let after_first = norm.current_score();
        assert!(after_first > 0.0);
        // The value handed to bar 1 is the score computed after bar 0.
        assert_eq!(norm.advance(100.0), after_first);
    }

    #[test]
    fn steady_volume_scores_five() {
        // Constant volume makes every sample equal its own percentile
        // reference, so vol / reference * 5 == 5.
        let mut norm = VolumeNormalizer::new();
        for _ in 0..50 {
            norm.advance(250.0);
        }
        assert!((norm.current_score() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn volume_spike_saturates_at_ten() {
        let mut norm = VolumeNormalizer::new();
        for _ in 0..100 {
            norm.advance(10.0);
        }
        // One huge bar against a quiet reference: the moving average jumps
        // far past twice the 99th-percentile sample, so the score clamps.
        norm.advance(10_000.0);
        assert_eq!(norm.current_score(), 10.0);
    }

    #[test]
    fn zero_volume_feed_never_divides_by_zero() {
        let mut norm = VolumeNormalizer::new();
        for _ in 0..20 {
            assert_eq!(norm.advance(0.0), 0.0);
        }
        assert_eq!(norm.current_score(), 0.0);
    }
}
