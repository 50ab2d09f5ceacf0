//! Candle fixtures.

use rust_decimal::Decimal;

use wick_core::Candle;

/// Flat candle at `open_time` with every price equal to one.
#[must_use]
pub fn candle(open_time: i64) -> Candle {
    candle_with_close(open_time, Decimal::ONE)
}

/// Candle at `open_time` whose OHLC prices all equal `close`.
///
/// The close time is one minute (minus a millisecond) after the open, the
/// shape the upstream uses for one-minute bars.
#[must_use]
pub fn candle_with_close(open_time: i64, close: Decimal) -> Candle {
    Candle {
        open_time,
        open: close,
        high: close,
        low: close,
        close,
        volume: Decimal::ZERO,
        close_time: open_time + 59_999,
        quote_asset_volume: Decimal::ZERO,
        number_of_trades: 0,
        taker_buy_base_asset_volume: Decimal::ZERO,
        taker_buy_quote_asset_volume: Decimal::ZERO,
        ignore: "0".to_owned(),
    }
}
