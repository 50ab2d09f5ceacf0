//! wick archives incremental candlestick history from an exchange REST API.
//!
//! Overview
//! - The [`Archiver`] enumerates tradable pairs, keeps those touching a
//!   small allowlist of reference assets, and drives one merge per pair,
//!   sequentially.
//! - The [`SeriesMerger`] resumes each pair from the last persisted
//!   `open_time`, paginates bounded batches out of a
//!   `wick_core::CandleSource`, and rewrites the pair's CSV series only
//!   when new data actually arrived.
//! - Cleaning (sort by `open_time`, dedup keeping the last occurrence)
//!   lives in `wick_core::timeseries`; the Binance transport, retrying
//!   fetcher, and pair listing live in `wick-binance`.
//!
//! Key behaviors and trade-offs
//! - Single-threaded, sequential: one pair is fully merged before the next
//!   begins, so no series file ever has concurrent writers.
//! - Resumable: a killed run restarts from the last persisted cursor; a
//!   no-op run leaves every file byte-for-byte untouched.
//! - Transient network failures cost a fixed cooldown (blocking the whole
//!   process) and are retried forever; non-OK responses end pagination for
//!   the current pair and the run moves on.
#![warn(missing_docs)]

/// Immutable run configuration.
pub mod config;
/// Sequential per-pair run driver.
pub mod driver;
/// The incremental fetch-and-merge loop.
pub mod merge;
/// Dataset publication seam.
pub mod publish;

pub use config::ArchiveConfig;
pub use driver::{Archiver, RunReport};
pub use merge::SeriesMerger;
pub use publish::DatasetPublisher;

// Re-export core types for convenience
pub use wick_core::{
    Batch, Candle, CandleSource, Clock, Interval, Pair, SeriesStore, SymbolListing, SystemClock,
    WickError,
};
