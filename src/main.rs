use anyhow::Result;
use clap::Parser;

use pool_sentry::analysis::DailyEvent;
use pool_sentry::utils::time_utils::epoch_ms_to_utc;
use pool_sentry::{CandleFeed, Cli, EngineEvent, PoolEngine};

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load feed + settings
    let feed = CandleFeed::load(&args.feed)?;
    let mut config = match &args.config {
        Some(path) => pool_sentry::data::load_engine_config(path)?,
        None => Default::default(),
    };
    if args.filter_hours {
        config.session.filter_by_trading_hours = true;
    }

    log::info!(
        "🎯 Replaying {} bars for {}",
        feed.candles.len(),
        feed.instrument
    );

    // D. Replay
    let mut engine = PoolEngine::new(feed.instrument.clone(), config);
    let show_daily = engine.config().daily.show_daily_levels;
    let ticker = feed.instrument.ticker().to_string();
    let mut alert_count = 0usize;

    for candle in &feed.candles {
        let update = engine.update(candle);

        for event in &update.events {
            log_event(update.index, candle.timestamp_ms, event, show_daily);
        }

        for condition in update.alerts.firing() {
            alert_count += 1;
            println!(
                "[ALERT] {}: {}",
                condition.title,
                condition.render(&ticker, candle.close_price)
            );
        }
    }

    // E. Summary
    log::info!(
        "Replay done: {} resistance / {} support zones active, {} alerts fired",
        engine.zones(pool_sentry::Side::Resistance).len(),
        engine.zones(pool_sentry::Side::Support).len(),
        alert_count
    );
    if let Some((high, low)) = engine.daily_extremes() {
        log::info!("Final day range: high {:.4} / low {:.4}", high, low);
    }

    Ok(())
}

fn log_event(index: u64, timestamp_ms: i64, event: &EngineEvent, show_daily: bool) {
    match event {
        EngineEvent::ZoneCreated { zone } => log::info!(
            "bar {}: new {} zone #{} [{:.4}, {:.4}] ({})",
            index,
            zone.side,
            zone.created_index,
            zone.bottom,
            zone.top,
            zone.liquidity_class
        ),
        EngineEvent::ZoneBroken { zone, broken_index } => log::info!(
            "bar {}: {} zone #{} broken at bar {}",
            index,
            zone.side,
            zone.created_index,
            broken_index
        ),
        EngineEvent::ZoneEvicted { zone } => log::debug!(
            "bar {}: {} zone #{} evicted by the global cap",
            index,
            zone.side,
            zone.created_index
        ),
        EngineEvent::Entered { side, level } => {
            log::debug!("bar {}: entered {} pool (level {})", index, side, level)
        }
        EngineEvent::InZone { side, level } => {
            log::debug!("bar {}: inside {} pool (level {})", index, side, level)
        }
        EngineEvent::Left { side, level } => {
            log::debug!("bar {}: left {} pool (level {})", index, side, level)
        }
        EngineEvent::Daily(daily) if show_daily => match daily {
            DailyEvent::Reset { high, low } => log::info!(
                "bar {}: new day at {}, range reset to {:.4}/{:.4}",
                index,
                epoch_ms_to_utc(timestamp_ms),
                high,
                low
            ),
            DailyEvent::HighExtended { high } => {
                log::debug!("bar {}: day high extended to {:.4}", index, high)
            }
            DailyEvent::LowExtended { low } => {
                log::debug!("bar {}: day low extended to {:.4}", index, low)
            }
        },
        EngineEvent::Daily(_) => {}
    }
}
