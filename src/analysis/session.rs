use crate::config::SessionSettings;
use crate::utils::time_utils::minute_of_day_utc;

/// Trading-session gate for alert emission. Pure function of the bar's
/// timestamp: no state, no side effects. With the filter toggle off every
/// bar counts as in-session; with it on, the bar's minute-of-day must fall
/// inside one of the configured half-open windows.
pub fn session_active(settings: &SessionSettings, timestamp_ms: i64) -> bool {
    if !settings.filter_by_trading_hours {
        return true;
    }

    let minute = minute_of_day_utc(timestamp_ms);
    settings
        .windows
        .iter()
        .any(|&(start, end)| minute >= start && minute < end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn at(hour: i64, minute: i64) -> i64 {
        hour * TimeUtils::MS_IN_H + minute * TimeUtils::MS_IN_MIN
    }

    #[test]
    fn filter_off_means_always_active() {
        let settings = SessionSettings::default();
        assert!(session_active(&settings, at(3, 0)));
    }

    #[test]
    fn windows_are_half_open() {
        let settings = SessionSettings {
            filter_by_trading_hours: true,
            ..SessionSettings::default()
        };

        // First window: 13:45-17:00
        assert!(!session_active(&settings, at(13, 44)));
        assert!(session_active(&settings, at(13, 45)), "start is inclusive");
        assert!(session_active(&settings, at(16, 59)));
        assert!(!session_active(&settings, at(17, 0)), "end is exclusive");

        // Second window: 19:00-23:00
        assert!(!session_active(&settings, at(18, 59)));
        assert!(session_active(&settings, at(19, 0)));
        assert!(session_active(&settings, at(22, 59)));
        assert!(!session_active(&settings, at(23, 0)));
    }

    #[test]
    fn gap_between_windows_is_inactive() {
        let settings = SessionSettings {
            filter_by_trading_hours: true,
            ..SessionSettings::default()
        };
        assert!(!session_active(&settings, at(17, 30)));
        assert!(!session_active(&settings, at(18, 0)));
    }
}
