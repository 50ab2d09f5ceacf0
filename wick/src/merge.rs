//! The incremental fetch-and-merge loop.

use std::sync::Arc;

use chrono::DateTime;
use tracing::{info, warn};

use wick_core::{
    Batch, Candle, CandleSource, Clock, Interval, Pair, SeriesStore, WickError, clean_candles,
    max_open_time,
};

/// Merges newly fetched batches into a pair's on-disk series.
///
/// One merger instance serves a whole run; each [`merge_series`] call owns
/// its pair's file exclusively for the duration of the call.
///
/// [`merge_series`]: SeriesMerger::merge_series
pub struct SeriesMerger {
    source: Arc<dyn CandleSource>,
    clock: Arc<dyn Clock>,
    store: SeriesStore,
    interval: Interval,
    batch_limit: u32,
}

impl SeriesMerger {
    /// Build a merger reading and writing series through `store`.
    #[must_use]
    pub fn new(
        source: Arc<dyn CandleSource>,
        clock: Arc<dyn Clock>,
        store: SeriesStore,
        interval: Interval,
        batch_limit: u32,
    ) -> Self {
        Self {
            source,
            clock,
            store,
            interval,
            batch_limit,
        }
    }

    /// Bring the series for `pair` up to date and return the number of rows
    /// added: cleaned length minus the length loaded from disk. The count
    /// can be zero or, in pathological dedup cases, negative; neither is an
    /// error.
    ///
    /// The series file is rewritten only when at least one batch arrived,
    /// so a no-op run leaves the prior file byte-for-byte untouched.
    ///
    /// # Errors
    /// Returns `WickError::Io`/`WickError::Csv` on series file problems and
    /// `WickError::Data` when the upstream payload is malformed. Transient
    /// network failures never surface here; the source absorbs them.
    pub async fn merge_series(&self, pair: &Pair) -> Result<i64, WickError> {
        let prior = self.store.load(pair)?.unwrap_or_default();
        let old_rows = prior.len();
        let mut cursor = max_open_time(&prior).unwrap_or(0);

        // The wall clock is read once per merge; catching up to "now" ends
        // pagination even if the upstream keeps answering.
        let now = self.clock.now_ms();

        let mut batches: Vec<Vec<Candle>> = vec![prior];
        let mut fetched = 0usize;

        loop {
            if cursor >= now {
                break;
            }
            let previous = cursor;

            let batch = self
                .source
                .fetch(pair, self.interval, cursor + 1, self.batch_limit)
                .await?;
            let rows = match batch {
                Batch::Candles(rows) => rows,
                // Requesting candles from the future comes back empty; a
                // non-OK response means no more data right now. Both end
                // pagination.
                Batch::Empty => break,
                Batch::Failed(status) => {
                    warn!(%pair, status, "stopping pagination on erroneous response");
                    break;
                }
            };

            cursor = max_open_time(&rows).unwrap_or(previous);
            // The newest bar is reported before it closes and does not
            // advance between polls; without this check the loop would spin
            // on it forever.
            if cursor == previous {
                break;
            }

            info!(
                %pair,
                interval = %self.interval,
                reached = %format_ms(cursor),
                rows = rows.len(),
                "fetched batch"
            );
            batches.push(rows);
            fetched += 1;
        }

        if fetched == 0 {
            return Ok(0);
        }

        let cleaned = clean_candles(batches.into_iter().flatten());
        self.store.save(pair, &cleaned)?;
        Ok(signed_len(&cleaned) - signed_len_of(old_rows))
    }
}

fn signed_len(candles: &[Candle]) -> i64 {
    signed_len_of(candles.len())
}

fn signed_len_of(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

fn format_ms(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms).map_or_else(|| ms.to_string(), |dt| dt.to_string())
}
