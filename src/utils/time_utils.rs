use chrono::{DateTime, Datelike, Timelike, Weekday};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_30_MIN: i64 = Self::MS_IN_S * 60 * 30;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Convert interval in milliseconds to a shorthand (e.g. `30m`, `1h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_5_MIN => "5m",
            Self::MS_IN_15_MIN => "15m",
            Self::MS_IN_30_MIN => "30m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_D => "1d",
            Self::MS_IN_W => "1w",
            _ => "unknown",
        }
    }
}

/// Minute of the UTC day (0..1440) for an epoch-millisecond timestamp.
/// The session gate compares against half-open minute windows.
pub fn minute_of_day_utc(epoch_ms: i64) -> u32 {
    let dt = DateTime::from_timestamp_millis(epoch_ms).expect("invalid timestamp");
    dt.hour() * 60 + dt.minute()
}

/// UTC day-of-week for an epoch-millisecond timestamp. The daily tracker
/// keys its reset on a change of this value, not on a calendar-date change.
pub fn weekday_utc(epoch_ms: i64) -> Weekday {
    let dt = DateTime::from_timestamp_millis(epoch_ms).expect("invalid timestamp");
    dt.weekday()
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    let dt = DateTime::from_timestamp_millis(epoch_ms).expect("invalid timestamp");
    format!("{}", dt.format(TimeUtils::STANDARD_TIME_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_of_day_rolls_over_at_midnight() {
        // 1970-01-01 00:00 UTC
        assert_eq!(minute_of_day_utc(0), 0);
        // 13:45 UTC
        let ms = (13 * 60 + 45) * TimeUtils::MS_IN_MIN;
        assert_eq!(minute_of_day_utc(ms), 825);
        // next day 00:01
        assert_eq!(minute_of_day_utc(TimeUtils::MS_IN_D + TimeUtils::MS_IN_MIN), 1);
    }

    #[test]
    fn weekday_changes_across_midnight() {
        // Epoch day zero was a Thursday
        assert_eq!(weekday_utc(0), Weekday::Thu);
        assert_eq!(weekday_utc(TimeUtils::MS_IN_D), Weekday::Fri);
    }
}
