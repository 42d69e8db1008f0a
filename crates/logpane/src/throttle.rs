//! Redraw Throttle - Wall-clock rate limiting for full-frame repaints
//!
//! A pure rate limiter, not a debounce: a redraw request arriving inside the
//! interval is dropped entirely, with no deferred retry. Callers must not
//! assume every state change reaches the screen; only the step counter and
//! the final frame are guaranteed (the renderer repaints those unthrottled).

use std::time::{Duration, Instant};

/// Decides whether a requested redraw may proceed
#[derive(Debug, Clone)]
pub struct RedrawThrottle {
    last_write: Option<Instant>,
    min_interval: Duration,
}

impl RedrawThrottle {
    /// Create a throttle enforcing `min_interval` between repaints
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_write: None,
            min_interval,
        }
    }

    /// True if no repaint happened yet, or the interval has elapsed
    pub fn should_redraw(&self, now: Instant) -> bool {
        match self.last_write {
            None => true,
            Some(last) => now.duration_since(last) >= self.min_interval,
        }
    }

    /// Record that a repaint happened at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last_write = Some(now);
    }
}
