use crate::config::{EngineConfig, LOW_LIQUIDITY_LEVEL};
use crate::domain::Candle;
use crate::models::{LiquidityClass, Side, Zone};

/// Decide whether a confirmed swing becomes a zone, and with what geometry
/// and classification.
///
/// Geometry is anchored to the pivot bar: the zone spans one half-range of
/// that bar beyond its extreme. `score` is the lagged normalized volume
/// score in effect when the swing confirmed.
pub fn propose_zone(
    side: Side,
    pivot: &Candle,
    created_index: u64,
    score: f64,
    config: &EngineConfig,
) -> Option<Zone> {
    let alerts = &config.alerts;

    if score < alerts.med_threshold && !config.zones.show_low_liquidity_zones {
        return None;
    }

    let half_range = pivot.half_range();
    if half_range <= 0.0 {
        // A flat pivot bar would produce a zero-height band, violating the
        // top > bottom invariant every zone must satisfy.
        return None;
    }

    let (top, bottom) = match side {
        Side::Resistance => (pivot.high_price + half_range, pivot.high_price),
        Side::Support => (pivot.low_price, pivot.low_price - half_range),
    };

    let (liquidity_level, liquidity_class) = if score >= alerts.high_threshold {
        (alerts.high_threshold, LiquidityClass::High)
    } else if score >= alerts.med_threshold {
        (alerts.med_threshold, LiquidityClass::Med)
    } else {
        (LOW_LIQUIDITY_LEVEL, LiquidityClass::Low)
    };

    Some(Zone {
        side,
        top,
        bottom,
        created_index,
        liquidity_level,
        liquidity_class,
    })
}
