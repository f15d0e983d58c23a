use crate::foundation::core::Millis;
use crate::foundation::error::{ArError, ArResult};

/// Default redraw timer period.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Outcome of one timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Animation is active; the screen should be redrawn.
    Redraw,
    /// Animation is paused; nothing to do.
    Skipped,
}

/// Repeating UI timer that requests redraws while the animation is active.
///
/// The timer never stops itself; it fires at `interval, 2 * interval, ...`.
#[derive(Debug, Clone)]
pub struct RedrawTicker {
    interval_ms: u64,
    next_due: Millis,
    fired: u64,
}

impl RedrawTicker {
    /// Create a ticker whose first firing is one interval after start.
    pub fn new(interval_ms: u64) -> ArResult<Self> {
        if interval_ms == 0 {
            return Err(ArError::validation("tick interval must be > 0 ms"));
        }
        Ok(Self {
            interval_ms,
            next_due: Millis(interval_ms),
            fired: 0,
        })
    }

    /// Timer period.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// When the timer fires next.
    pub fn next_due(&self) -> Millis {
        self.next_due
    }

    /// Firings so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Fire the timer at its due time and schedule the next firing.
    pub fn fire(&mut self, animation_active: bool) -> (Millis, Tick) {
        let at = self.next_due;
        self.next_due = at.add_ms(self.interval_ms);
        self.fired += 1;
        let tick = if animation_active {
            Tick::Redraw
        } else {
            Tick::Skipped
        };
        (at, tick)
    }
}
