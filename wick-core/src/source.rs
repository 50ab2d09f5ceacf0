//! Source traits implemented by exchange connectors.

use async_trait::async_trait;

use crate::{Candle, Interval, Pair, WickError};

/// Outcome of one bounded candle fetch.
///
/// `Empty` and `Failed` both end pagination for the caller, but the tag is
/// kept so callers can tell "genuinely no more data" from "the request was
/// refused" when logging or deciding policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Batch {
    /// At most `limit` parsed rows, in upstream order.
    Candles(Vec<Candle>),
    /// The requested range holds no data, e.g. a start beyond the newest bar.
    Empty,
    /// Upstream answered with a non-OK status; no data available right now.
    Failed(u16),
}

/// Focused role trait for sources that provide bounded candle batches.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch at most `limit` candles for `pair` at `interval` with
    /// `open_time >= start_time` (epoch ms; 0 means from the beginning).
    ///
    /// Implementations absorb transient network failures internally; a
    /// returned error means the response could not be understood.
    ///
    /// # Errors
    /// Returns `WickError::Data` when the payload is malformed.
    async fn fetch(
        &self,
        pair: &Pair,
        interval: Interval,
        start_time: i64,
        limit: u32,
    ) -> Result<Batch, WickError>;
}

/// Focused role trait for sources that enumerate tradable pairs.
#[async_trait]
pub trait SymbolListing: Send + Sync {
    /// List every tradable pair on the exchange.
    ///
    /// # Errors
    /// Returns `WickError::Upstream` when the listing call fails; callers
    /// treat this as fatal to the run.
    async fn list_pairs(&self) -> Result<Vec<Pair>, WickError>;
}
