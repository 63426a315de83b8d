// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// The engine
pub mod engine;

// Re-export commonly used types
pub use config::EngineConfig;
pub use data::CandleFeed;
pub use domain::{Candle, Instrument};
pub use engine::{BarUpdate, EngineEvent, PoolEngine};
pub use models::{AlertFlags, LiquidityClass, Side, Zone};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON candle feed to replay through the engine
    pub feed: PathBuf,

    /// Optional JSON file overriding the default engine settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Gate alerts by the configured trading-hour windows
    #[arg(long, default_value_t = false)]
    pub filter_hours: bool,
}
