use crate::config::AlertSettings;

/// A gated signal out of one side's inside/outside state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Price moved from outside to inside a zone this bar.
    Entered { level: f64 },
    /// Price is still inside; fires every in-zone bar after the entry bar.
    InZone { level: f64 },
    /// Price moved from inside to outside. `level` is the strength stored
    /// on the LAST bar spent inside - not a maximum over the whole visit.
    Left { level: f64 },
}

/// Inside/outside tracking for one side.
///
/// The stored level is refreshed on every inside bar regardless of gating,
/// and the was-inside flag flips unconditionally at the end of every bar:
/// gating and the session filter only decide whether a signal is EMITTED,
/// never what the machine remembers.
#[derive(Debug, Clone, Default)]
pub struct SideState {
    was_in_zone: bool,
    stored_level: f64,
}

impl SideState {
    pub fn advance(
        &mut self,
        price_in_zone: bool,
        zone_level: f64,
        session_active: bool,
        alerts: &AlertSettings,
    ) -> Option<Transition> {
        let signal = match (self.was_in_zone, price_in_zone) {
            (false, true) => {
                self.stored_level = zone_level;
                (alerts.gated(zone_level) && session_active)
                    .then_some(Transition::Entered { level: zone_level })
            }
            (true, true) => {
                self.stored_level = zone_level;
                (alerts.gated(zone_level) && session_active)
                    .then_some(Transition::InZone { level: zone_level })
            }
            (true, false) => {
                let level = self.stored_level;
                (alerts.gated(level) && session_active)
                    .then_some(Transition::Left { level })
            }
            (false, false) => None,
        };

        self.was_in_zone = price_in_zone;
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alerts() -> AlertSettings {
        AlertSettings::default() // med 4, high 7, both toggles on
    }

    #[test]
    fn enter_then_dwell_then_leave() {
        let mut state = SideState::default();
        let a = alerts();

        assert_eq!(
            state.advance(true, 7.0, true, &a),
            Some(Transition::Entered { level: 7.0 })
        );
        assert_eq!(
            state.advance(true, 7.0, true, &a),
            Some(Transition::InZone { level: 7.0 })
        );
        assert_eq!(
            state.advance(false, 0.0, true, &a),
            Some(Transition::Left { level: 7.0 })
        );
        assert_eq!(state.advance(false, 0.0, true, &a), None);
    }

    #[test]
    fn leave_uses_the_last_inside_level_not_the_maximum() {
        let mut state = SideState::default();
        let a = alerts();

        state.advance(true, 7.0, true, &a);
        // The strong zone broke mid-visit; a weaker overlapping one remains.
        state.advance(true, 4.0, true, &a);
        assert_eq!(
            state.advance(false, 0.0, true, &a),
            Some(Transition::Left { level: 4.0 }),
            "stored level tracks the most recent inside bar"
        );
    }

    #[test]
    fn ungated_entry_still_flips_state() {
        let mut state = SideState::default();
        let a = AlertSettings {
            alert_on_high: false,
            alert_on_medium: false,
            ..alerts()
        };

        assert_eq!(state.advance(true, 7.0, true, &a), None);
        // No enter was emitted, but the machine is inside now: going back
        // outside yields no spurious enter later.
        assert_eq!(state.advance(false, 0.0, true, &a), None);
        assert_eq!(state.advance(true, 7.0, true, &a), None);
    }

    #[test]
    fn out_of_session_bars_emit_nothing_but_still_track() {
        let mut state = SideState::default();
        let a = alerts();

        assert_eq!(state.advance(true, 7.0, false, &a), None, "entry outside the session is silent");
        // Back in session while still inside the zone: the continuous
        // signal resumes without a fresh enter.
        assert_eq!(
            state.advance(true, 7.0, true, &a),
            Some(Transition::InZone { level: 7.0 })
        );
    }

    #[test]
    fn low_liquidity_visits_never_alert() {
        let mut state = SideState::default();
        let a = alerts();

        assert_eq!(state.advance(true, 1.0, true, &a), None);
        assert_eq!(state.advance(false, 0.0, true, &a), None);
    }
}
