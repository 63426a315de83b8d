use std::path::PathBuf;

use anyhow::Result;
use pool_sentry::data::CandleFeed;
use pool_sentry::domain::{Candle, Instrument};
use pool_sentry::utils::TimeUtils;

const OUTPUT_PATH: &str = "demo_feed.json";
const BARS: usize = 600;
/// Bars per full price cycle of the synthetic wave.
const CYCLE: usize = 50;

fn main() -> Result<()> {
    build_demo_feed()
}

/// Writes a fully deterministic synthetic feed: a slow price wave with
/// volume bursts at its crests and troughs, so every run produces the same
/// candles and the replay binary produces the same zones and alerts.
fn build_demo_feed() -> Result<()> {
    let interval_ms = TimeUtils::MS_IN_30_MIN;
    let mut candles = Vec::with_capacity(BARS);

    for i in 0..BARS {
        let phase = (i % CYCLE) as f64 / CYCLE as f64 * std::f64::consts::TAU;
        let wave = 100.0 + 8.0 * phase.sin();

        // Small deterministic wobble so consecutive bars are not identical
        let wobble = ((i * 37) % 11) as f64 / 10.0 - 0.5;
        let open = wave + 0.4 * wobble;
        let close = wave + 0.7 * wobble;
        let high = open.max(close) + 0.6 + wobble.abs();
        let low = open.min(close) - 0.6 - wobble.abs();

        // The wave tops out around bar 12 and bottoms around bar 37 of each
        // cycle; bursts there make those extremes volume-confirmed pivots.
        let cycle_pos = i % CYCLE;
        let at_extreme = (12..=13).contains(&cycle_pos) || (37..=38).contains(&cycle_pos);
        let volume = if at_extreme {
            9_000.0
        } else {
            1_000.0 + ((i * 13) % 7) as f64 * 40.0
        };

        candles.push(Candle::new(
            open,
            high,
            low,
            close,
            volume,
            i as i64 * interval_ms,
        ));
    }

    let feed = CandleFeed {
        instrument: Instrument::new("DEMOUSDT", interval_ms),
        candles,
    };

    let path = PathBuf::from(OUTPUT_PATH);
    feed.save(&path)?;

    println!("✅ Demo feed written to {:?} with {} candles.", path, BARS);
    Ok(())
}
