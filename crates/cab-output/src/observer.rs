//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use log::warn;

use cab_core::SimClock;
use cab_sim::{FleetCounts, SimObserver, Snapshot};

use crate::row::{EdgeSnapshotRow, PassengerSnapshotRow, StepSummaryRow, TaxiSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row after every step and the full
/// taxi, passenger and edge tables at every snapshot, to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }

    fn write_snapshot(&mut self, snapshot: &Snapshot) -> OutputResult<()> {
        let clock = &snapshot.clock;
        let taxis: Vec<TaxiSnapshotRow> =
            snapshot.taxis.iter().map(|t| TaxiSnapshotRow::new(clock, t)).collect();
        let passengers: Vec<PassengerSnapshotRow> =
            snapshot.passengers.iter().map(|p| PassengerSnapshotRow::new(clock, p)).collect();
        let edges: Vec<EdgeSnapshotRow> =
            snapshot.edges.iter().map(|e| EdgeSnapshotRow::new(clock, e)).collect();

        self.writer.write_taxis(&taxis)?;
        self.writer.write_passengers(&passengers)?;
        self.writer.write_edges(&edges)
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, clock: &SimClock, counts: &FleetCounts) {
        let result = self.writer.write_step_summary(&StepSummaryRow::new(clock, counts));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let result = self.write_snapshot(snapshot);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
