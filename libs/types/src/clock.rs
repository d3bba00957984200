//! Timestamp source
//!
//! All timestamps are Unix milliseconds. Engines read the clock only in
//! their convenience entry points; the `_at` variants take the time as an
//! argument so replays and tests stay deterministic.

use chrono::Utc;

/// Source of "now" for order creation and trade execution
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
