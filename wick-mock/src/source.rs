//! Scripted source and listing implementations.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use wick_core::{Batch, CandleSource, Interval, Pair, SymbolListing, WickError};

/// Candle source that replays a fixed script of outcomes.
///
/// Each `fetch` pops the front of the script and records the requested
/// `start_time`; fetching past the end of the script yields [`Batch::Empty`],
/// which is also what a caught-up upstream would return.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<Batch, WickError>>>,
    start_times: Mutex<Vec<i64>>,
}

impl ScriptedSource {
    /// Source that replays `script` front to back.
    #[must_use]
    pub fn new(script: Vec<Result<Batch, WickError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            start_times: Mutex::new(Vec::new()),
        }
    }

    /// The `start_time` of every fetch issued so far, in call order.
    ///
    /// # Panics
    /// Panics when the internal call log is poisoned.
    #[must_use]
    pub fn start_times(&self) -> Vec<i64> {
        self.start_times.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl CandleSource for ScriptedSource {
    async fn fetch(
        &self,
        _pair: &Pair,
        _interval: Interval,
        start_time: i64,
        _limit: u32,
    ) -> Result<Batch, WickError> {
        self.start_times
            .lock()
            .expect("call log poisoned")
            .push(start_time);
        self.script
            .lock()
            .expect("script poisoned")
            .pop_front()
            .unwrap_or(Ok(Batch::Empty))
    }
}

/// Pair listing that returns a fixed set of pairs, or fails every call with
/// a scripted message.
#[derive(Debug, Clone)]
pub struct ScriptedListing {
    outcome: Result<Vec<Pair>, String>,
}

impl ScriptedListing {
    /// Listing that always returns `pairs`.
    #[must_use]
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self {
            outcome: Ok(pairs),
        }
    }

    /// Listing that always fails with `msg`.
    #[must_use]
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            outcome: Err(msg.into()),
        }
    }
}

#[async_trait]
impl SymbolListing for ScriptedListing {
    async fn list_pairs(&self) -> Result<Vec<Pair>, WickError> {
        self.outcome
            .clone()
            .map_err(|msg| WickError::upstream("exchangeInfo", msg))
    }
}
