use crate::analysis::DailyEvent;
use crate::models::{AlertFlags, Side, Zone};

/// Everything the engine reports about one bar, in emission order.
///
/// These are passive, immutable records: the rendering collaborator draws
/// from them, the alerting collaborator routes on the flags. The engine
/// never hands out a drawing handle.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ZoneCreated {
        zone: Zone,
    },
    /// Price broke through the zone's far boundary. The zone's visible
    /// right extent freezes at `broken_index`; the zone itself is already
    /// out of the registry when this event is observed.
    ZoneBroken {
        zone: Zone,
        broken_index: u64,
    },
    /// The global cap claimed the oldest surviving zone.
    ZoneEvicted {
        zone: Zone,
    },
    Entered {
        side: Side,
        level: f64,
    },
    InZone {
        side: Side,
        level: f64,
    },
    Left {
        side: Side,
        level: f64,
    },
    Daily(DailyEvent),
}

/// Per-bar outcome handed back from `PoolEngine::update`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarUpdate {
    /// Engine-assigned bar index (monotonic from 0).
    pub index: u64,
    pub events: Vec<EngineEvent>,
    /// The four named alert conditions, evaluated for this bar.
    pub alerts: AlertFlags,
}
