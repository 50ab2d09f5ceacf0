//! The retrying batch fetcher.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use wick_core::{Batch, CandleSource, Clock, Interval, Pair, WickError};

use crate::transport::{KlinesRequest, KlinesTransport, TransportError};

/// Cooldown before retrying a transiently failed request.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5 * 60);

/// Bounded candle fetcher with unbounded cooldown-retry on transient
/// network failures.
///
/// Retrying forever keeps long-running unattended jobs alive through flaky
/// networks; there is no backoff growth and no retry ceiling. Non-OK
/// responses are never retried here; they come back as [`Batch::Failed`]
/// and the caller decides what "no more data right now" means.
pub struct BatchFetcher {
    transport: Arc<dyn KlinesTransport>,
    clock: Arc<dyn Clock>,
    cooldown: Duration,
}

impl BatchFetcher {
    /// Build a fetcher over `transport` using `clock` for cooldown sleeps.
    #[must_use]
    pub fn new(transport: Arc<dyn KlinesTransport>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transport,
            clock,
            cooldown: DEFAULT_COOLDOWN,
        }
    }

    /// Override the retry cooldown.
    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }
}

#[async_trait]
impl CandleSource for BatchFetcher {
    async fn fetch(
        &self,
        pair: &Pair,
        interval: Interval,
        start_time: i64,
        limit: u32,
    ) -> Result<Batch, WickError> {
        let request = KlinesRequest {
            symbol: pair.symbol(),
            interval,
            start_time,
            limit,
        };
        loop {
            match self.transport.klines(&request).await {
                Ok(rows) if rows.is_empty() => return Ok(Batch::Empty),
                Ok(rows) => return Ok(Batch::Candles(rows)),
                Err(TransportError::Transient(msg)) => {
                    warn!(
                        %pair,
                        error = %msg,
                        cooldown_secs = self.cooldown.as_secs(),
                        "transient network error, cooling down"
                    );
                    self.clock.sleep(self.cooldown).await;
                }
                Err(TransportError::Status(code)) => {
                    warn!(%pair, status = code, "erroneous response from klines endpoint");
                    return Ok(Batch::Failed(code));
                }
                Err(TransportError::Malformed(msg)) => {
                    return Err(WickError::data(format!("{pair}: {msg}")));
                }
            }
        }
    }
}
