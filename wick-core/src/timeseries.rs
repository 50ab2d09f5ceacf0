//! Time-series utilities enforcing series invariants.

use std::collections::BTreeMap;

use crate::Candle;

/// Sort candles ascending by `open_time` and drop duplicate keys.
///
/// The last-seen occurrence of a duplicated `open_time` wins, so freshly
/// fetched rows override whatever an earlier batch (or the prior file)
/// carried for the same bar. The output is strictly increasing with no
/// duplicate keys.
#[must_use]
pub fn clean_candles<I>(candles: I) -> Vec<Candle>
where
    I: IntoIterator<Item = Candle>,
{
    let mut by_open_time: BTreeMap<i64, Candle> = BTreeMap::new();
    for candle in candles {
        by_open_time.insert(candle.open_time, candle);
    }
    by_open_time.into_values().collect()
}

/// Maximum `open_time` in `candles`, or `None` when the slice is empty.
#[must_use]
pub fn max_open_time(candles: &[Candle]) -> Option<i64> {
    candles.iter().map(|c| c.open_time).max()
}
