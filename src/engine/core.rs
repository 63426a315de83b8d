use crate::analysis::{
    propose_zone, session_active, DailyExtremeTracker, SwingDetector, VolumeNormalizer,
};
use crate::config::EngineConfig;
use crate::domain::{Candle, Instrument};
use crate::models::{AlertFlags, Side, Zone};

use super::messages::{BarUpdate, EngineEvent};
use super::registry::{enforce_zone_cap, ZoneRegistry};
use super::state::{SideState, Transition};

/// The liquidity-pool engine for one (instrument, timeframe) feed.
///
/// Strictly single-threaded and synchronous: bars go in one at a time
/// through `update`, events come out, and no partial state is observable
/// between bars. All mutable state lives inside this struct - replaying an
/// identical bar sequence through a fresh instance reproduces an identical
/// zone set and an identical ordered event sequence.
pub struct PoolEngine {
    instrument: Instrument,

    /// The live configuration snapshot.
    config: EngineConfig,

    // Per-bar analysis components
    volume: VolumeNormalizer,
    swings: SwingDetector,
    daily: DailyExtremeTracker,

    // One registry and one transition state per side
    resistance: ZoneRegistry,
    support: ZoneRegistry,
    resistance_state: SideState,
    support_state: SideState,

    /// Swings confirm one bar late, so zone geometry lives one bar back.
    prev_candle: Option<Candle>,

    /// Monotonic bar counter, assigned on arrival.
    next_index: u64,
}

impl PoolEngine {
    pub fn new(instrument: Instrument, config: EngineConfig) -> Self {
        Self {
            instrument,
            config,
            volume: VolumeNormalizer::new(),
            swings: SwingDetector::new(),
            daily: DailyExtremeTracker::new(),
            resistance: ZoneRegistry::new(Side::Resistance),
            support: ZoneRegistry::new(Side::Support),
            resistance_state: SideState::default(),
            support_state: SideState::default(),
            prev_candle: None,
            next_index: 0,
        }
    }

    /// THE BAR LOOP. One call per fully-closed bar, in feed order.
    pub fn update(&mut self, candle: &Candle) -> BarUpdate {
        let index = self.next_index;
        self.next_index += 1;

        let mut events = Vec::new();

        // 1. Volume score in effect for THIS bar (computed through the
        //    previous one), then fold this bar's volume in.
        let score = self.volume.advance(candle.base_volume);

        // 2. Swing confirmation. The pivot is the previous bar; a confirmed
        //    swing hands its geometry and the lagged score to the factory.
        let marks = self.swings.advance(candle);
        if let Some(pivot) = self.prev_candle.clone() {
            if marks.swing_high {
                self.create_zone(Side::Resistance, &pivot, index, score, &mut events);
            }
            if marks.swing_low {
                self.create_zone(Side::Support, &pivot, index, score, &mut events);
            }
        }

        // 3. Registry scans: breakage, then containment of the close.
        let res_scan = self.resistance.update(candle);
        let sup_scan = self.support.update(candle);
        for zone in res_scan.broken {
            log::debug!("[{}] resistance zone #{} broken", self.instrument, zone.created_index);
            events.push(EngineEvent::ZoneBroken {
                zone,
                broken_index: index,
            });
        }
        for zone in sup_scan.broken {
            log::debug!("[{}] support zone #{} broken", self.instrument, zone.created_index);
            events.push(EngineEvent::ZoneBroken {
                zone,
                broken_index: index,
            });
        }

        // 4. Global cap: at most one eviction per bar, oldest first.
        if let Some(zone) = enforce_zone_cap(
            &mut self.resistance,
            &mut self.support,
            self.config.zones.max_zones,
        ) {
            events.push(EngineEvent::ZoneEvicted { zone });
        }

        // 5. Session gate + the two transition state machines.
        let in_session = session_active(&self.config.session, candle.timestamp_ms);
        let mut alerts = AlertFlags::default();

        let res_transition = self.resistance_state.advance(
            res_scan.price_in_zone,
            res_scan.zone_level,
            in_session,
            &self.config.alerts,
        );
        Self::apply_transition(Side::Resistance, res_transition, &mut alerts, &mut events);

        let sup_transition = self.support_state.advance(
            sup_scan.price_in_zone,
            sup_scan.zone_level,
            in_session,
            &self.config.alerts,
        );
        Self::apply_transition(Side::Support, sup_transition, &mut alerts, &mut events);

        // 6. Daily extremes run independently of the zone pipeline.
        for daily_event in self.daily.update(candle) {
            events.push(EngineEvent::Daily(daily_event));
        }

        self.prev_candle = Some(candle.clone());

        BarUpdate {
            index,
            events,
            alerts,
        }
    }

    fn create_zone(
        &mut self,
        side: Side,
        pivot: &Candle,
        index: u64,
        score: f64,
        events: &mut Vec<EngineEvent>,
    ) {
        if let Some(zone) = propose_zone(side, pivot, index, score, &self.config) {
            log::debug!(
                "[{}] new {} zone #{} [{:.4}, {:.4}] class {}",
                self.instrument,
                side,
                index,
                zone.bottom,
                zone.top,
                zone.liquidity_class
            );
            events.push(EngineEvent::ZoneCreated { zone: zone.clone() });
            match side {
                Side::Resistance => self.resistance.insert(zone),
                Side::Support => self.support.insert(zone),
            }
        }
    }

    fn apply_transition(
        side: Side,
        transition: Option<Transition>,
        alerts: &mut AlertFlags,
        events: &mut Vec<EngineEvent>,
    ) {
        match transition {
            Some(Transition::Entered { level }) => {
                alerts.entered_pool = true;
                events.push(EngineEvent::Entered { side, level });
            }
            Some(Transition::InZone { level }) => {
                events.push(EngineEvent::InZone { side, level });
            }
            Some(Transition::Left { level }) => {
                match side {
                    Side::Resistance => alerts.left_resistance = true,
                    Side::Support => alerts.left_support = true,
                }
                alerts.left_pool = true;
                events.push(EngineEvent::Left { side, level });
            }
            None => {}
        }
    }

    // --- Accessors for collaborators ---

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Swap in a new configuration snapshot; takes effect from the next bar.
    pub fn update_config(&mut self, new_config: EngineConfig) {
        self.config = new_config;
    }

    /// Active zones of one side, in creation order.
    pub fn zones(&self, side: Side) -> &[Zone] {
        match side {
            Side::Resistance => self.resistance.zones(),
            Side::Support => self.support.zones(),
        }
    }

    pub fn active_zone_count(&self) -> usize {
        self.resistance.len() + self.support.len()
    }

    /// Current day's (high, low), once at least one bar has been seen.
    pub fn daily_extremes(&self) -> Option<(f64, f64)> {
        self.daily.extremes()
    }
}
