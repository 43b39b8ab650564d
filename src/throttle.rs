//! Throttle and debounce helpers for coalescing continuous input.
//!
//! All geometry runs synchronously on the host's UI thread; the only
//! asynchrony in the engine is coalescing of ghost-preview updates and
//! deferred field commits. Both helpers take explicit timestamps instead
//! of reading a clock, so hosts drive them from their event loop and tests
//! drive them directly.
//!
//! Cancellation matters: a pending debounced value must be dropped when a
//! newer event supersedes it (new drag frame, field blur, teardown) — a
//! stale callback firing after cancellation would corrupt the latest
//! intended value.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Rate limiter: `ready` returns true at most once per interval.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_fire: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_fire: None }
    }

    /// Whether an event at `now_ms` may fire. Records the fire time when
    /// it does. The first call always fires.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_fire {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_fire = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last fire time so the next event fires immediately.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}

/// Deferred single-value commit: the latest submitted value fires once the
/// delay elapses with no newer submission.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay_ms: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, pending: None }
    }

    /// Stage `value`, replacing any pending one and restarting the delay.
    pub fn submit(&mut self, now_ms: f64, value: T) {
        self.pending = Some((now_ms + self.delay_ms, value));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        if self.pending.as_ref().is_some_and(|(deadline, _)| now_ms >= *deadline) {
            return self.pending.take().map(|(_, v)| v);
        }
        None
    }

    /// Take the pending value immediately, deadline or not (field blur).
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// Drop the pending value so it can never fire.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is staged and waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
