use chrono::Weekday;

use crate::domain::Candle;
use crate::utils::time_utils::weekday_utc;

/// What the daily tracker observed on a bar. `Reset` carries the fresh
/// extremes; the extension events carry just the new level. The rendering
/// collaborator turns these into lines/labels; deleting a previous visual
/// that does not exist yet (first bar of a run) must be a no-op on its side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyEvent {
    Reset { high: f64, low: f64 },
    HighExtended { high: f64 },
    LowExtended { low: f64 },
}

/// Maintains the running high/low of the current calendar day.
///
/// The day key is the bar's UTC day-of-week, so a "new day" is a change of
/// weekday rather than a true midnight crossing. On a key change the
/// extremes reset to that bar's own high/low, never to +/- infinity;
/// between resets they only widen.
#[derive(Debug, Clone, Default)]
pub struct DailyExtremeTracker {
    day_key: Option<Weekday>,
    high: f64,
    low: f64,
}

impl DailyExtremeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, candle: &Candle) -> Vec<DailyEvent> {
        let key = weekday_utc(candle.timestamp_ms);

        if self.day_key != Some(key) {
            self.day_key = Some(key);
            self.high = candle.high_price;
            self.low = candle.low_price;
            return vec![DailyEvent::Reset {
                high: self.high,
                low: self.low,
            }];
        }

        let mut events = Vec::new();
        if candle.high_price > self.high {
            self.high = candle.high_price;
            events.push(DailyEvent::HighExtended { high: self.high });
        }
        if candle.low_price < self.low {
            self.low = candle.low_price;
            events.push(DailyEvent::LowExtended { low: self.low });
        }
        events
    }

    /// Current day's extremes, once at least one bar has been seen.
    pub fn extremes(&self) -> Option<(f64, f64)> {
        self.day_key.map(|_| (self.high, self.low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn candle(high: f64, low: f64, timestamp_ms: i64) -> Candle {
        Candle::new((high + low) / 2.0, high, low, (high + low) / 2.0, 1.0, timestamp_ms)
    }

    #[test]
    fn first_bar_resets_to_its_own_extremes() {
        let mut tracker = DailyExtremeTracker::new();
        let events = tracker.update(&candle(101.0, 99.0, 0));
        assert_eq!(events, vec![DailyEvent::Reset { high: 101.0, low: 99.0 }]);
        assert_eq!(tracker.extremes(), Some((101.0, 99.0)));
    }

    #[test]
    fn extremes_extend_monotonically_within_a_day() {
        let mut tracker = DailyExtremeTracker::new();
        tracker.update(&candle(101.0, 99.0, 0));

        let events = tracker.update(&candle(103.0, 98.0, TimeUtils::MS_IN_H));
        assert_eq!(
            events,
            vec![
                DailyEvent::HighExtended { high: 103.0 },
                DailyEvent::LowExtended { low: 98.0 }
            ]
        );

        // An inside bar moves nothing.
        let events = tracker.update(&candle(102.0, 100.0, 2 * TimeUtils::MS_IN_H));
        assert!(events.is_empty());
        assert_eq!(tracker.extremes(), Some((103.0, 98.0)));
    }

    #[test]
    fn day_change_resets_to_the_new_bars_extremes_not_the_old_days() {
        let mut tracker = DailyExtremeTracker::new();
        tracker.update(&candle(110.0, 90.0, 0));

        // Next UTC day: extremes must equal this bar's own range, the wide
        // previous-day range must be gone.
        let events = tracker.update(&candle(101.0, 100.0, TimeUtils::MS_IN_D));
        assert_eq!(events, vec![DailyEvent::Reset { high: 101.0, low: 100.0 }]);
        assert_eq!(tracker.extremes(), Some((101.0, 100.0)));
    }

    #[test]
    fn same_weekday_a_week_later_does_not_reset() {
        // Known wrinkle of the day-of-week key: a Thursday bar exactly one
        // week after a Thursday bar keeps the same key.
        let mut tracker = DailyExtremeTracker::new();
        tracker.update(&candle(110.0, 90.0, 0));
        let events = tracker.update(&candle(105.0, 95.0, TimeUtils::MS_IN_W));
        assert!(events.is_empty(), "weekday key unchanged, no reset");
    }
}
