use std::fs;

use rust_decimal::Decimal;
use tempfile::TempDir;
use wick_core::{Candle, Pair, SeriesStore};

fn sample_candle(open_time: i64) -> Candle {
    Candle {
        open_time,
        open: Decimal::new(13_500, 8),
        high: Decimal::new(13_650, 8),
        low: Decimal::new(13_400, 8),
        close: Decimal::new(13_600, 8),
        volume: Decimal::new(125_000, 3),
        close_time: open_time + 59_999,
        quote_asset_volume: Decimal::new(16_875, 9),
        number_of_trades: 42,
        taker_buy_base_asset_volume: Decimal::new(60_000, 3),
        taker_buy_quote_asset_volume: Decimal::new(8_100, 9),
        ignore: "0".to_owned(),
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    let pair = Pair::new("ETH", "BTC");

    let series = vec![sample_candle(1_000), sample_candle(61_000)];
    store.save(&pair, &series).unwrap();

    let loaded = store.load(&pair).unwrap().unwrap();
    assert_eq!(loaded, series);
}

#[test]
fn missing_file_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    assert!(store.load(&Pair::new("ETH", "BTC")).unwrap().is_none());
}

#[test]
fn header_matches_field_names_in_order() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    let pair = Pair::new("ETH", "USDT");

    store.save(&pair, &[sample_candle(1_000)]).unwrap();

    let contents = fs::read_to_string(store.path(&pair)).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, Candle::FIELD_NAMES.join(","));
}

#[test]
fn file_is_named_after_the_pair() {
    let dir = TempDir::new().unwrap();
    let store = SeriesStore::open(dir.path()).unwrap();
    let path = store.path(&Pair::new("DOGE", "USDT"));
    assert_eq!(path.file_name().unwrap(), "DOGE-USDT.csv");
}

#[test]
fn open_creates_the_data_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("spot");
    SeriesStore::open(&nested).unwrap();
    assert!(nested.is_dir());
}
