//! The candlestick row and its wire-format parsing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::WickError;

/// One fixed-duration aggregated price/volume record for a trading pair.
///
/// Field order matters: the CSV store derives the series-file header from
/// it, and the upstream klines payload maps onto it positionally.
/// `open_time` is the natural primary key and sort key within a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open timestamp in milliseconds since the Unix epoch.
    pub open_time: i64,
    /// Opening price.
    pub open: Decimal,
    /// Highest price of the bar.
    pub high: Decimal,
    /// Lowest price of the bar.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded base-asset volume.
    pub volume: Decimal,
    /// Bar close timestamp in milliseconds since the Unix epoch.
    pub close_time: i64,
    /// Traded quote-asset volume.
    pub quote_asset_volume: Decimal,
    /// Number of trades aggregated into the bar.
    pub number_of_trades: u64,
    /// Taker buy base-asset volume.
    pub taker_buy_base_asset_volume: Decimal,
    /// Taker buy quote-asset volume.
    pub taker_buy_quote_asset_volume: Decimal,
    /// Opaque trailing field carried verbatim from the upstream payload.
    pub ignore: String,
}

/// Positional shape of one upstream klines row. Prices and volumes arrive as
/// JSON strings; `Decimal`'s deserializer accepts them as-is.
type RawRow = (
    i64,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
    Decimal,
    i64,
    Decimal,
    u64,
    Decimal,
    Decimal,
    serde_json::Value,
);

impl Candle {
    /// Column names of the series-file header, in wire order.
    pub const FIELD_NAMES: [&'static str; 12] = [
        "open_time",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "close_time",
        "quote_asset_volume",
        "number_of_trades",
        "taker_buy_base_asset_volume",
        "taker_buy_quote_asset_volume",
        "ignore",
    ];

    /// Parse one positional klines row into a candle.
    ///
    /// # Errors
    /// Returns `WickError::Data` when the row has the wrong arity or a field
    /// fails to parse.
    pub fn from_row(row: &serde_json::Value) -> Result<Self, WickError> {
        let raw: RawRow = serde_json::from_value(row.clone())
            .map_err(|e| WickError::data(format!("malformed kline row: {e}")))?;
        let ignore = match raw.11 {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(Self {
            open_time: raw.0,
            open: raw.1,
            high: raw.2,
            low: raw.3,
            close: raw.4,
            volume: raw.5,
            close_time: raw.6,
            quote_asset_volume: raw.7,
            number_of_trades: raw.8,
            taker_buy_base_asset_volume: raw.9,
            taker_buy_quote_asset_volume: raw.10,
            ignore,
        })
    }
}
