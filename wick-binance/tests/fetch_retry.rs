use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use wick_binance::{BatchFetcher, KlinesRequest, KlinesTransport, TransportError};
use wick_core::{Batch, Candle, CandleSource, Interval, Pair, WickError};
use wick_mock::{ManualClock, candle};

/// Transport that fails transiently a fixed number of times, then succeeds.
struct FlakyTransport {
    failures_left: AtomicUsize,
    rows: Vec<Candle>,
}

impl FlakyTransport {
    fn new(failures: usize, rows: Vec<Candle>) -> Self {
        Self {
            failures_left: AtomicUsize::new(failures),
            rows,
        }
    }
}

#[async_trait]
impl KlinesTransport for FlakyTransport {
    async fn klines(&self, _req: &KlinesRequest) -> Result<Vec<Candle>, TransportError> {
        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::SeqCst);
            return Err(TransportError::Transient("connection reset".to_owned()));
        }
        Ok(self.rows.clone())
    }
}

/// Transport that always answers with the given outcome.
struct FixedTransport(fn() -> Result<Vec<Candle>, TransportError>);

#[async_trait]
impl KlinesTransport for FixedTransport {
    async fn klines(&self, _req: &KlinesRequest) -> Result<Vec<Candle>, TransportError> {
        (self.0)()
    }
}

fn pair() -> Pair {
    Pair::new("ETH", "BTC")
}

#[tokio::test]
async fn transient_failure_retries_after_one_cooldown() {
    let transport = Arc::new(FlakyTransport::new(1, vec![candle(60_000)]));
    let clock = Arc::new(ManualClock::at(0));
    let cooldown = Duration::from_secs(300);
    let fetcher = BatchFetcher::new(transport, clock.clone()).with_cooldown(cooldown);

    let batch = fetcher.fetch(&pair(), Interval::I1m, 1, 1000).await.unwrap();

    assert_eq!(batch, Batch::Candles(vec![candle(60_000)]));
    assert_eq!(clock.sleeps(), vec![cooldown]);
}

#[tokio::test]
async fn repeated_transient_failures_keep_retrying() {
    let transport = Arc::new(FlakyTransport::new(3, vec![candle(60_000)]));
    let clock = Arc::new(ManualClock::at(0));
    let fetcher = BatchFetcher::new(transport, clock.clone());

    let batch = fetcher.fetch(&pair(), Interval::I1m, 1, 1000).await.unwrap();

    assert_eq!(batch, Batch::Candles(vec![candle(60_000)]));
    assert_eq!(clock.sleeps().len(), 3);
}

#[tokio::test]
async fn non_ok_status_is_not_retried() {
    let transport = Arc::new(FixedTransport(|| Err(TransportError::Status(500))));
    let clock = Arc::new(ManualClock::at(0));
    let fetcher = BatchFetcher::new(transport, clock.clone());

    let batch = fetcher.fetch(&pair(), Interval::I1m, 1, 1000).await.unwrap();

    assert_eq!(batch, Batch::Failed(500));
    assert!(clock.sleeps().is_empty());
}

#[tokio::test]
async fn empty_rows_map_to_empty_batch() {
    let transport = Arc::new(FixedTransport(|| Ok(Vec::new())));
    let clock = Arc::new(ManualClock::at(0));
    let fetcher = BatchFetcher::new(transport, clock);

    let batch = fetcher.fetch(&pair(), Interval::I1m, 1, 1000).await.unwrap();
    assert_eq!(batch, Batch::Empty);
}

#[tokio::test]
async fn malformed_payload_surfaces_as_data_error() {
    let transport = Arc::new(FixedTransport(|| {
        Err(TransportError::Malformed("wrong arity".to_owned()))
    }));
    let clock = Arc::new(ManualClock::at(0));
    let fetcher = BatchFetcher::new(transport, clock);

    let err = fetcher
        .fetch(&pair(), Interval::I1m, 1, 1000)
        .await
        .unwrap_err();
    assert!(matches!(err, WickError::Data(_)));
}
