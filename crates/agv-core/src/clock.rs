//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing [`Tick`] counter plus an accumulated
//! simulated-seconds total in [`SimClock`].  Unlike fixed-duration schedulers,
//! the stepper is driven with a variable `delta_secs` each tick (hosts pass
//! whatever wall-clock interval elapsed, scaled by their speed multiplier),
//! so the clock accumulates rather than multiplies.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 60 ticks/second a u64 lasts ~9.7 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and total simulated seconds.
///
/// Cheap to copy; intentionally holds no heap data.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by [`advance`](Self::advance) each step.
    pub current_tick: Tick,
    /// Simulated seconds elapsed since tick 0 (speed-scaled deltas summed).
    pub elapsed_secs: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick covering `sim_secs` simulated seconds.
    #[inline]
    pub fn advance(&mut self, sim_secs: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += sim_secs;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.1}s)", self.current_tick, self.elapsed_secs)
    }
}
