//! Simulation observer trait for progress reporting and data collection.

use cab_core::SimClock;

use crate::{FleetCounts, Snapshot};

/// Callbacks invoked by [`Sim::run_steps`][crate::Sim::run_steps] and
/// [`Sim::run_for`][crate::Sim::run_for] around every step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, clock: &SimClock, counts: &FleetCounts) {
///         if clock.tick.0 % self.every == 0 {
///             println!("{clock}: {} waiting", counts.passengers_waiting);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a step, with the clock as it was before advancing.
    fn on_step_start(&mut self, _clock: &SimClock) {}

    /// Called after every step.
    fn on_step_end(&mut self, _clock: &SimClock, _counts: &FleetCounts) {}

    /// Called every `config.output_interval_steps` steps with the full
    /// post-step state.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once after the last step of a run.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
