//! Process-wide request counter.
//!
//! [`RequestCounter`] hands out 1, 2, 3, … and wraps back to 1 before the
//! value would reach `i32::MAX`. The increment-and-wrap is a single
//! atomic read-modify-write, so concurrent handlers never observe the same
//! value and no increment is lost.

use std::sync::atomic::{AtomicI32, Ordering};

/// Largest value the counter may hold before wrapping. `i32::MAX` itself
/// is never handed out.
pub const WRAP_AT: i32 = i32::MAX;

#[derive(Debug)]
pub struct RequestCounter {
    // Last value handed out; 0 until the first request.
    last: AtomicI32,
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_after(0)
    }

    /// Counter whose next [`increment`](Self::increment) returns the
    /// successor of `last` under the wrap rule.
    #[must_use]
    pub const fn starting_after(last: i32) -> Self {
        Self {
            last: AtomicI32::new(last),
        }
    }

    /// Increments the counter and returns the new value, in `[1, WRAP_AT - 1]`.
    pub fn increment(&self) -> i32 {
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(successor(current))
            })
            .unwrap_or_else(|current| current);
        successor(previous)
    }

    /// Last value handed out, or 0 if no request has been counted yet.
    #[must_use]
    pub fn current(&self) -> i32 {
        self.last.load(Ordering::Acquire)
    }
}

const fn successor(current: i32) -> i32 {
    if current < 0 || current >= WRAP_AT - 1 {
        1
    } else {
        current + 1
    }
}
