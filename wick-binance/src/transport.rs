//! HTTP transport for the klines endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use wick_core::{Candle, Interval, WickError};

/// Public production REST base.
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Default per-request network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters of one bounded klines request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlinesRequest {
    /// Concatenated base+quote symbol, e.g. `ETHBTC`.
    pub symbol: String,
    /// Candle granularity label.
    pub interval: Interval,
    /// Inclusive lower bound on `open_time`, in epoch ms.
    pub start_time: i64,
    /// Maximum rows to return; the upstream caps this at 1000.
    pub limit: u32,
}

/// Transport-level failure classification.
///
/// `Transient` is the only variant worth retrying; the split exists so the
/// retry loop never has to inspect reqwest internals.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failure, reset, or timeout; safe to retry after a cooldown.
    #[error("transient network error: {0}")]
    Transient(String),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The response body could not be parsed into candle rows.
    #[error("malformed klines payload: {0}")]
    Malformed(String),
}

/// Low-level klines call, HTTP in production and scripted in tests.
#[async_trait]
pub trait KlinesTransport: Send + Sync {
    /// Issue one bounded klines request and parse the rows.
    ///
    /// # Errors
    /// Returns a [`TransportError`] classifying the failure for the caller's
    /// retry decision.
    async fn klines(&self, req: &KlinesRequest) -> Result<Vec<Candle>, TransportError>;
}

/// reqwest-backed transport against the Binance REST API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for `base_url` with `timeout` per request.
    ///
    /// # Errors
    /// Returns `WickError::InvalidArg` when the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WickError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WickError::invalid_arg(format!("http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Transport against the public production endpoint.
    ///
    /// # Errors
    /// Returns `WickError::InvalidArg` when the HTTP client cannot be built.
    pub fn production(timeout: Duration) -> Result<Self, WickError> {
        Self::new(DEFAULT_BASE_URL, timeout)
    }
}

#[async_trait]
impl KlinesTransport for HttpTransport {
    async fn klines(&self, req: &KlinesRequest) -> Result<Vec<Candle>, TransportError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", req.symbol.clone()),
                ("interval", req.interval.as_str().to_owned()),
                ("startTime", req.start_time.to_string()),
                ("limit", req.limit.to_string()),
            ])
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let rows: Vec<Value> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Transient(e.to_string())
            } else {
                TransportError::Malformed(e.to_string())
            }
        })?;
        rows.iter()
            .map(Candle::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

/// Connection failures, resets, and timeouts are transient; anything else
/// means the request itself is broken and retrying cannot help.
fn classify_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        TransportError::Transient(err.to_string())
    } else {
        TransportError::Malformed(err.to_string())
    }
}
