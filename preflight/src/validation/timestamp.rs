//! Timestamp predicates
//!
//! These never fail: anything that is not a usable epoch-millisecond value
//! is simply `false`.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Smallest accepted value: the first 13-digit epoch millisecond
pub const MIN_TIMESTAMP_MS: i64 = 1_000_000_000_000;

/// Largest accepted value: 9999-12-31T23:59:59.999Z
pub const MAX_TIMESTAMP_MS: i64 = 253_402_300_799_999;

/// Half-width of the freshness window around the current time
pub const FRESHNESS_WINDOW_MS: i64 = 5_000;

/// Source of the current wall-clock time
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Check whether `value` is an epoch-millisecond timestamp in the accepted range
///
/// Values before 2001-09-09T01:46:40Z (fewer than 13 digits) are rejected on
/// purpose, so small integers and second-resolution timestamps do not pass.
pub fn is_timestamp(value: i64) -> bool {
    (MIN_TIMESTAMP_MS..=MAX_TIMESTAMP_MS).contains(&value)
        && DateTime::<Utc>::from_timestamp_millis(value).is_some()
}

/// Check whether `value` lies within the freshness window of the system clock
pub fn is_now(value: i64) -> bool {
    FreshnessValidator::new(SystemClock).is_now(value)
}

/// [`is_timestamp`] for a JSON field; only integers qualify
pub fn is_timestamp_value(value: &Value) -> bool {
    value.as_i64().is_some_and(is_timestamp)
}

/// [`is_now`] for a JSON field; only integers qualify
pub fn is_now_value(value: &Value) -> bool {
    value.as_i64().is_some_and(is_now)
}

/// Decides whether timestamps are "now" against an injectable clock
#[derive(Debug, Clone)]
pub struct FreshnessValidator<C: Clock> {
    clock: C,
    window_ms: i64,
}

impl<C: Clock> FreshnessValidator<C> {
    /// Create a validator with the default window
    pub fn new(clock: C) -> Self {
        Self::with_window(clock, FRESHNESS_WINDOW_MS)
    }

    /// Create a validator with a custom half-width in milliseconds
    pub fn with_window(clock: C, window_ms: i64) -> Self {
        Self {
            clock,
            window_ms: window_ms.saturating_abs(),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }

    /// True iff `value` is a valid timestamp within the window, bounds inclusive
    pub fn is_now(&self, value: i64) -> bool {
        if !is_timestamp(value) {
            return false;
        }

        let now = self.clock.now_millis();
        value.abs_diff(now) <= self.window_ms.unsigned_abs()
    }
}
