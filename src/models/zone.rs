use strum_macros::Display;

use crate::domain::Candle;

/// Which side of price a pool sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    Resistance,
    Support,
}

/// Liquidity classification of a zone, decided once at creation from the
/// normalized volume score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LiquidityClass {
    Low,
    Med,
    High,
}

/// A single liquidity pool: a price band around a volume-confirmed swing
/// pivot. Geometry is fixed at creation and never reshaped; a zone's life
/// ends when price breaks through its far boundary or the global cap evicts
/// it. Being held by a registry IS the "active" state - broken or evicted
/// zones are dropped, never kept as dead records.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub side: Side,
    pub top: f64,
    pub bottom: f64,
    /// Bar index the zone was created on. Doubles as the eviction key:
    /// smallest created_index goes first.
    pub created_index: u64,
    /// Numeric strength on the normalized-volume scale, saturated at the
    /// threshold it cleared (or 1.0 for Low).
    pub liquidity_level: f64,
    pub liquidity_class: LiquidityClass,
}

impl Zone {
    /// Containment is inclusive on both boundaries.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.bottom && price <= self.top
    }

    /// Breakage test: price moving through the far boundary. For resistance
    /// that is the top, for support the bottom.
    pub fn is_broken_by(&self, candle: &Candle) -> bool {
        match self.side {
            Side::Resistance => candle.high_price > self.top,
            Side::Support => candle.low_price < self.bottom,
        }
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}
