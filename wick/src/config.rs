//! Immutable run configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use wick_core::{Interval, Pair};

/// Configuration for one archive run.
///
/// Values are plain data handed to the components that need them; nothing
/// here is global or mutable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Directory holding one CSV series file per pair.
    pub data_dir: PathBuf,
    /// Candle granularity for every fetched series.
    pub interval: Interval,
    /// Maximum rows per klines request; the upstream caps this at 1000.
    pub batch_limit: u32,
    /// Cooldown before retrying a transiently failed request.
    pub cooldown: Duration,
    /// Per-request network timeout.
    pub request_timeout: Duration,
    /// A pair is archived when its base or quote is one of these assets.
    pub reference_assets: Vec<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            interval: Interval::I1m,
            batch_limit: 1000,
            cooldown: Duration::from_secs(5 * 60),
            request_timeout: Duration::from_secs(30),
            reference_assets: vec!["BTC".to_owned(), "USDT".to_owned()],
        }
    }
}

impl ArchiveConfig {
    /// Whether `pair` belongs to the run per the reference-asset filter.
    #[must_use]
    pub fn includes(&self, pair: &Pair) -> bool {
        self.reference_assets
            .iter()
            .any(|asset| asset == &pair.base || asset == &pair.quote)
    }
}
