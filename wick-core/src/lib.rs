//! wick-core
//!
//! Core types, traits, and utilities shared across the wick workspace.
//!
//! - `candle`: the OHLCV row and its positional wire-format parsing.
//! - `types`: pair and interval identifiers.
//! - `source`: the `CandleSource` and `SymbolListing` traits connectors implement.
//! - `clock`: the injectable wall clock used by retry cooldowns and the merge loop.
//! - `timeseries`: the cleaning routine enforcing series ordering invariants.
//! - `store`: CSV-backed file-per-pair series persistence.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime:
//! `SystemClock::sleep` is backed by the Tokio timer, so production use of
//! the retrying fetcher must run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// The candlestick row and its wire-format parsing.
pub mod candle;
/// Injectable wall clock and sleep facility.
pub mod clock;
/// Unified error type for the wick workspace.
pub mod error;
/// Source traits implemented by exchange connectors.
pub mod source;
/// CSV-backed persistence for candle series.
pub mod store;
/// Time-series utilities enforcing series invariants.
pub mod timeseries;
pub mod types;

pub use candle::Candle;
pub use clock::{Clock, SystemClock};
pub use error::WickError;
pub use source::{Batch, CandleSource, SymbolListing};
pub use store::SeriesStore;
pub use timeseries::{clean_candles, max_open_time};
pub use types::{Interval, Pair};
