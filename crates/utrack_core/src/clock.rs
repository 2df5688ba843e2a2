//! Time source for event timestamps.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the timestamp attached to store notifications.
pub trait Clock {
    /// Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        // A clock set before 1970 reports 0 rather than failing the mutation.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Manually driven clock for deterministic callers and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.get()
    }
}
