//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is continuous and measured in **minutes** (`f64`).  The
//! caller chooses the step size `Δt` for every call to the stepper, so the
//! clock keeps two counters:
//!
//! - `now_mins`: total simulated minutes since the start of the run.
//! - `tick`: how many steps have been taken.  Used for output cadence and
//!   row keys; it carries no duration on its own.
//!
//! Wall-clock pacing is entirely the driver's concern.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Step counter: the number of completed `step` calls.
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

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Simulated time plus step counter.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated minutes since the start of the run.
    pub now_mins: f64,
    /// Number of steps taken so far.
    pub tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt_mins` simulated minutes and count one step.
    #[inline]
    pub fn advance(&mut self, dt_mins: f64) {
        self.now_mins += dt_mins;
        self.tick = self.tick.offset(1);
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now_mins
    }

    /// Break elapsed time into (hours, minutes, seconds), truncating.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = (self.now_mins.max(0.0) * 60.0) as u64;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
