//! Tradable-pair listing via the exchangeInfo endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use wick_core::{Pair, SymbolListing, WickError};

use crate::transport::DEFAULT_BASE_URL;

#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<SymbolEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolEntry {
    base_asset: String,
    quote_asset: String,
}

/// Pair listing backed by `GET /api/v3/exchangeInfo`.
///
/// Unlike the klines path there is no retry here: a failed listing aborts
/// the whole run before any pair is processed.
#[derive(Debug, Clone)]
pub struct BinanceListing {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceListing {
    /// Build a listing client for `base_url` with `timeout` per request.
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

    /// Listing client against the public production endpoint.
    ///
    /// # Errors
    /// Returns `WickError::InvalidArg` when the HTTP client cannot be built.
    pub fn production(timeout: Duration) -> Result<Self, WickError> {
        Self::new(DEFAULT_BASE_URL, timeout)
    }
}

#[async_trait]
impl SymbolListing for BinanceListing {
    async fn list_pairs(&self) -> Result<Vec<Pair>, WickError> {
        let url = format!("{}/api/v3/exchangeInfo", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WickError::upstream("exchangeInfo", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WickError::upstream(
                "exchangeInfo",
                format!("status {status}"),
            ));
        }

        let info: ExchangeInfo = response
            .json()
            .await
            .map_err(|e| WickError::upstream("exchangeInfo", e.to_string()))?;
        Ok(info
            .symbols
            .into_iter()
            .map(|s| Pair::new(s.base_asset, s.quote_asset))
            .collect())
    }
}
