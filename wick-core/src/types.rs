//! Pair and interval identifiers.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::WickError;

/// A tradable market identified by a base asset and a quote asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Base asset code, e.g. `ETH`.
    pub base: String,
    /// Quote asset code, e.g. `BTC`.
    pub quote: String,
}

impl Pair {
    /// Build a pair from base and quote asset codes.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Upstream symbol: base and quote concatenated, e.g. `ETHBTC`.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }

    /// Series file stem, `BASE-QUOTE`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.base, self.quote)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.quote)
    }
}

/// Candle granularity labels the archiver can request upstream.
///
/// The variant set mirrors the interval labels of the candlestick endpoint;
/// one run uses a single fixed interval for every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// One-minute bars.
    #[default]
    #[serde(rename = "1m")]
    I1m,
    /// Five-minute bars.
    #[serde(rename = "5m")]
    I5m,
    /// Fifteen-minute bars.
    #[serde(rename = "15m")]
    I15m,
    /// One-hour bars.
    #[serde(rename = "1h")]
    I1h,
    /// Four-hour bars.
    #[serde(rename = "4h")]
    I4h,
    /// Daily bars.
    #[serde(rename = "1d")]
    I1d,
}

impl Interval {
    /// The upstream label for this interval.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I1h => "1h",
            Self::I4h => "4h",
            Self::I1d => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = WickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::I1m),
            "5m" => Ok(Self::I5m),
            "15m" => Ok(Self::I15m),
            "1h" => Ok(Self::I1h),
            "4h" => Ok(Self::I4h),
            "1d" => Ok(Self::I1d),
            other => Err(WickError::invalid_arg(format!(
                "unknown interval label: {other}"
            ))),
        }
    }
}
