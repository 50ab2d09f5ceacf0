use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wick::{ArchiveConfig, Archiver, SeriesMerger, SeriesStore, SystemClock, WickError};
use wick_binance::{BatchFetcher, BinanceListing, HttpTransport};

#[tokio::main]
async fn main() -> Result<(), WickError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ArchiveConfig::default();
    if let Ok(dir) = std::env::var("WICK_DATA_DIR") {
        config.data_dir = dir.into();
    }
    if let Ok(interval) = std::env::var("WICK_INTERVAL") {
        config.interval = interval.parse()?;
    }

    let clock = Arc::new(SystemClock);
    let store = SeriesStore::open(&config.data_dir)?;
    let transport = Arc::new(HttpTransport::production(config.request_timeout)?);
    let fetcher = BatchFetcher::new(transport, clock.clone()).with_cooldown(config.cooldown);
    let merger = SeriesMerger::new(
        Arc::new(fetcher),
        clock,
        store,
        config.interval,
        config.batch_limit,
    );
    let listing = Arc::new(BinanceListing::production(config.request_timeout)?);

    let report = Archiver::new(listing, merger, config).run().await?;
    info!(
        pairs = report.pairs_included,
        updated = report.pairs_updated,
        rows = report.rows_added,
        "run complete"
    );
    Ok(())
}
