use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::{Candle, Instrument};

/// On-disk candle feed: one instrument/timeframe and its closed bars in
/// feed order. The engine consumes these sequentially; everything the
/// engine assumes about well-formed bars is checked here, at the loading
/// seam, so the per-bar path can stay infallible.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CandleFeed {
    pub instrument: Instrument,
    pub candles: Vec<Candle>,
}

impl CandleFeed {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read feed file {:?}", path))?;
        let feed: CandleFeed = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse feed file {:?}", path))?;
        feed.validate()?;
        Ok(feed)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self).context("Failed to serialize feed")?;
        fs::write(path, raw).with_context(|| format!("Failed to write feed file {:?}", path))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.candles.is_empty() {
            bail!("Feed for {} contains no candles", self.instrument);
        }

        for (i, pair) in self.candles.windows(2).enumerate() {
            if pair[1].timestamp_ms <= pair[0].timestamp_ms {
                bail!(
                    "Feed for {} is not in time order at candle {} ({} then {})",
                    self.instrument,
                    i + 1,
                    pair[0].timestamp_ms,
                    pair[1].timestamp_ms
                );
            }
        }

        if let Some((i, bad)) = self
            .candles
            .iter()
            .enumerate()
            .find(|(_, c)| c.high_price < c.low_price || c.base_volume < 0.0)
        {
            bail!(
                "Feed for {} has a malformed candle at index {}: {:?}",
                self.instrument,
                i,
                bad
            );
        }

        Ok(())
    }
}

/// Load engine settings from a JSON override file. Missing fields fall
/// back to the defaults, so a host can override just one sub-group.
pub fn load_engine_config(path: &Path) -> Result<EngineConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config: EngineConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(config)
}
