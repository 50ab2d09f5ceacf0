use std::fs;
use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;
use wick::{Batch, Interval, Pair, SeriesMerger, SeriesStore, WickError};
use wick_mock::{ManualClock, ScriptedSource, candle, candle_with_close};

/// Far enough in the future that no fixture timestamp ever catches up.
const NOW_MS: i64 = 10_000_000;

fn pair() -> Pair {
    Pair::new("ETH", "BTC")
}

fn merger_with(
    dir: &TempDir,
    script: Vec<Result<Batch, WickError>>,
    now_ms: i64,
) -> (SeriesMerger, Arc<ScriptedSource>) {
    let source = Arc::new(ScriptedSource::new(script));
    let clock = Arc::new(ManualClock::at(now_ms));
    let store = SeriesStore::open(dir.path()).unwrap();
    let merger = SeriesMerger::new(source.clone(), clock, store, Interval::I1m, 1000);
    (merger, source)
}

fn open_times(dir: &TempDir) -> Vec<i64> {
    let store = SeriesStore::open(dir.path()).unwrap();
    store
        .load(&pair())
        .unwrap()
        .unwrap_or_default()
        .iter()
        .map(|c| c.open_time)
        .collect()
}

// The concrete end-to-end case: one prior row, one fresh batch, then the
// upstream runs dry.
#[tokio::test]
async fn appends_new_batches_after_the_persisted_cursor() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    store.save(&pair(), &[candle(1_000)]).unwrap();

    let script = vec![Ok(Batch::Candles(vec![candle(2_000), candle(3_000)]))];
    let (merger, source) = merger_with(&dir, script, NOW_MS);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 2);
    assert_eq!(open_times(&dir), vec![1_000, 2_000, 3_000]);
    // Resumes one past the persisted cursor, then one past the batch max
    assert_eq!(source.start_times(), vec![1_001, 3_001]);
}

#[tokio::test]
async fn resumes_across_arbitrary_page_splits() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    store.save(&pair(), &[candle(1_000)]).unwrap();

    let script = vec![
        Ok(Batch::Candles(vec![candle(2_000)])),
        Ok(Batch::Candles(vec![candle(3_000), candle(4_000)])),
        Ok(Batch::Candles(vec![candle(5_000)])),
    ];
    let (merger, source) = merger_with(&dir, script, NOW_MS);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 4);
    assert_eq!(open_times(&dir), vec![1_000, 2_000, 3_000, 4_000, 5_000]);
    assert_eq!(source.start_times(), vec![1_001, 2_001, 4_001, 5_001]);
}

#[tokio::test]
async fn second_run_with_no_new_data_is_idempotent() {
    let dir = TempDir::new().unwrap();

    let script = vec![Ok(Batch::Candles(vec![candle(1_000), candle(2_000)]))];
    let (merger, _) = merger_with(&dir, script, NOW_MS);
    assert_eq!(merger.merge_series(&pair()).await.unwrap(), 2);

    let store = SeriesStore::open(dir.path()).unwrap();
    let before = fs::read(store.path(&pair())).unwrap();

    // Upstream has nothing newer: the scripted source immediately runs dry
    let (merger, _) = merger_with(&dir, Vec::new(), NOW_MS);
    assert_eq!(merger.merge_series(&pair()).await.unwrap(), 0);

    let after = fs::read(store.path(&pair())).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn still_open_bar_stops_after_one_call_without_appending() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    store.save(&pair(), &[candle(1_000)]).unwrap();
    let before = fs::read(store.path(&pair())).unwrap();

    // Queried at start_time 1001, the upstream re-reports the open bar at
    // the existing cursor
    let script = vec![Ok(Batch::Candles(vec![candle(1_000)]))];
    let (merger, source) = merger_with(&dir, script, NOW_MS);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 0);
    assert_eq!(source.start_times(), vec![1_001]);
    assert_eq!(fs::read(store.path(&pair())).unwrap(), before);
}

#[tokio::test]
async fn empty_upstream_writes_no_file() {
    let dir = TempDir::new().unwrap();
    let (merger, source) = merger_with(&dir, Vec::new(), NOW_MS);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 0);
    assert_eq!(source.start_times(), vec![1]);
    let store = SeriesStore::open(dir.path()).unwrap();
    assert!(!store.path(&pair()).exists());
}

#[tokio::test]
async fn caught_up_cursor_skips_fetching_entirely() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    store.save(&pair(), &[candle(1_000)]).unwrap();

    // Wall clock sits behind the persisted cursor
    let (merger, source) = merger_with(&dir, Vec::new(), 900);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 0);
    assert!(source.start_times().is_empty());
}

#[tokio::test]
async fn failed_response_keeps_batches_fetched_so_far() {
    let dir = TempDir::new().unwrap();
    let script = vec![
        Ok(Batch::Candles(vec![candle(1_000), candle(2_000)])),
        Ok(Batch::Failed(429)),
    ];
    let (merger, _) = merger_with(&dir, script, NOW_MS);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 2);
    assert_eq!(open_times(&dir), vec![1_000, 2_000]);
}

#[tokio::test]
async fn refetched_bar_overrides_the_persisted_row() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    store
        .save(&pair(), &[candle_with_close(1_000, Decimal::ONE)])
        .unwrap();

    // The upstream re-sends bar 1000 with a different close alongside a new
    // bar; cleaning keeps the last-seen (freshly fetched) occurrence
    let refetched = candle_with_close(1_000, Decimal::TWO);
    let script = vec![Ok(Batch::Candles(vec![refetched.clone(), candle(2_000)]))];
    let (merger, _) = merger_with(&dir, script, NOW_MS);

    let added = merger.merge_series(&pair()).await.unwrap();

    assert_eq!(added, 1);
    let rows = store.load(&pair()).unwrap().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], refetched);
}

#[tokio::test]
async fn malformed_payload_aborts_the_merge() {
    let dir = TempDir::new().unwrap();
    let script = vec![Err(WickError::data("malformed kline row"))];
    let (merger, _) = merger_with(&dir, script, NOW_MS);

    let err = merger.merge_series(&pair()).await.unwrap_err();
    assert!(matches!(err, WickError::Data(_)));

    let store = SeriesStore::open(dir.path()).unwrap();
    assert!(!store.path(&pair()).exists());
}
