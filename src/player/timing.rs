//! Playback timing and the fixed-period ticker that drives it.
//!
//! The player itself only understands ticks. `Ticker` converts wall-clock
//! time into whole ticks so the main loop can stay single-threaded and the
//! player stays deterministic under test.

use std::time::Duration;

/// Upper bound on ticks delivered by a single `Ticker::advance` call.
///
/// Protects the loop after a long suspend (laptop lid, SIGSTOP) from
/// replaying minutes of animation in one frame.
pub const MAX_CATCH_UP_TICKS: u32 = 50;

/// Tick period and dwell period for the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// Time between two ticks
    pub tick: Duration,
    /// How long a completed line stays on screen before the next one starts
    pub dwell: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            dwell: Duration::from_millis(1000),
        }
    }
}

impl PlaybackTiming {
    pub fn new(tick: Duration, dwell: Duration) -> Self {
        Self { tick, dwell }
    }

    /// Dwell expressed in ticks, rounded up, never less than one.
    pub fn dwell_ticks(&self) -> u32 {
        let tick = self.tick.as_nanos();
        if tick == 0 {
            return 1;
        }
        let ticks = self.dwell.as_nanos().div_ceil(tick);
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }
}

/// Fixed-period tick accumulator.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    carry: Duration,
}

impl Ticker {
    /// Create a ticker. A zero period is clamped to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            carry: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feed elapsed wall-clock time, returning how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let due = self.carry.as_nanos() / self.period.as_nanos();
        if due == 0 {
            return 0;
        }
        if due > u128::from(MAX_CATCH_UP_TICKS) {
            self.carry = Duration::ZERO;
            return MAX_CATCH_UP_TICKS;
        }
        let due = due as u32;
        self.carry -= self.period * due;
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.carry)
    }
}
