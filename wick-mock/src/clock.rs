//! Manual clock for deterministic cooldown and termination tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use wick_core::Clock;

/// Clock frozen at a configurable instant; `sleep` records the requested
/// duration and returns immediately, so retry tests run without delay.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicI64,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    /// Clock frozen at `now_ms`.
    #[must_use]
    pub fn at(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    /// Move the clock to `now_ms`.
    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// Durations passed to `sleep`, in call order.
    ///
    /// # Panics
    /// Panics when the internal sleep log is poisoned.
    #[must_use]
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("sleep log poisoned").clone()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    async fn sleep(&self, dur: Duration) {
        self.sleeps.lock().expect("sleep log poisoned").push(dur);
    }
}
