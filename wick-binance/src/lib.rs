//! wick-binance
//!
//! Binance REST connector for the wick archiver.
//!
//! - `transport`: the low-level klines call behind the [`KlinesTransport`]
//!   trait, with a reqwest-backed production implementation.
//! - `fetcher`: the [`BatchFetcher`] implementing `wick_core::CandleSource`
//!   with unbounded cooldown-retry on transient network failures.
//! - `listing`: the `exchangeInfo` pair listing implementing
//!   `wick_core::SymbolListing`.
#![warn(missing_docs)]

/// The retrying batch fetcher.
pub mod fetcher;
/// Tradable-pair listing via the exchangeInfo endpoint.
pub mod listing;
/// HTTP transport for the klines endpoint.
pub mod transport;

pub use fetcher::{BatchFetcher, DEFAULT_COOLDOWN};
pub use listing::BinanceListing;
pub use transport::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpTransport, KlinesRequest, KlinesTransport,
    TransportError,
};
