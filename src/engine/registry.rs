use crate::domain::Candle;
use crate::models::{Side, Zone};

/// Result of scanning one side's zones against a bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryScan {
    /// Did the bar's close land inside any surviving zone?
    pub price_in_zone: bool,
    /// Strongest liquidity level among the zones containing the close.
    /// Stays 0.0 when `price_in_zone` is false.
    pub zone_level: f64,
    /// Zones destroyed by breakage this bar, in creation order.
    pub broken: Vec<Zone>,
}

/// Owns the ordered set of active zones for one side.
///
/// Zones sit in creation order (oldest first) and their geometry never
/// changes after insertion; the only mutation this registry performs is
/// removal, either by breakage here or by the global cap.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    side: Side,
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            zones: Vec::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Active zones in creation order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn insert(&mut self, zone: Zone) {
        debug_assert_eq!(zone.side, self.side);
        debug_assert!(zone.top > zone.bottom);
        self.zones.push(zone);
    }

    /// Run the per-bar scan: breakage first, then containment for every
    /// zone that survived, then removal as one stable filter pass.
    ///
    /// The removal set is computed up front and applied in a single pass,
    /// so iteration order is never disturbed and no index is removed twice.
    pub fn update(&mut self, candle: &Candle) -> RegistryScan {
        let mut broken_flags = vec![false; self.zones.len()];
        let mut price_in_zone = false;
        let mut zone_level: f64 = 0.0;

        for (i, zone) in self.zones.iter().enumerate() {
            if zone.is_broken_by(candle) {
                broken_flags[i] = true;
                continue;
            }
            if zone.contains(candle.close_price) {
                price_in_zone = true;
                // Overlapping zones: the strongest one wins.
                zone_level = zone_level.max(zone.liquidity_level);
            }
        }

        let mut broken = Vec::new();
        let mut kept = Vec::with_capacity(self.zones.len());
        for (i, zone) in std::mem::take(&mut self.zones).into_iter().enumerate() {
            if broken_flags[i] {
                broken.push(zone);
            } else {
                kept.push(zone);
            }
        }
        self.zones = kept;

        RegistryScan {
            price_in_zone,
            zone_level,
            broken,
        }
    }

    /// Creation order means the oldest zone is always at the front.
    pub fn oldest_created_index(&self) -> Option<u64> {
        self.zones.first().map(|z| z.created_index)
    }

    fn evict_oldest(&mut self) -> Option<Zone> {
        if self.zones.is_empty() {
            None
        } else {
            Some(self.zones.remove(0))
        }
    }
}

/// Bounds the combined zone count across both registries.
///
/// Evicts at most ONE zone per bar - the smallest `created_index` across
/// both sides - so an over-full pair of registries drains gradually rather
/// than being snapped back to the cap in a single bar.
pub fn enforce_zone_cap(
    resistance: &mut ZoneRegistry,
    support: &mut ZoneRegistry,
    max_zones: usize,
) -> Option<Zone> {
    if resistance.len() + support.len() <= max_zones {
        return None;
    }

    match (
        resistance.oldest_created_index(),
        support.oldest_created_index(),
    ) {
        // Ties (both sides created a zone on the same bar) go to resistance
        // for a reproducible order.
        (Some(r), Some(s)) if r <= s => resistance.evict_oldest(),
        (Some(_), Some(_)) => support.evict_oldest(),
        (Some(_), None) => resistance.evict_oldest(),
        (None, Some(_)) => support.evict_oldest(),
        (None, None) => None,
    }
}
