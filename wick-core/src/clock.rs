//! Injectable time source.
//!
//! Wall-clock reads and cooldown sleeps go through this trait so the merge
//! loop's termination conditions and the fetcher's retry cooldowns stay
//! deterministic under test.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

/// Injectable wall clock and sleep facility.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;

    /// Sleep for `dur`.
    async fn sleep(&self, dur: Duration);
}

/// System clock backed by `chrono` and the Tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    async fn sleep(&self, dur: Duration) {
        tokio::time::sleep(dur).await;
    }
}
