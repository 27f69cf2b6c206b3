//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EdgeSnapshotRow, OutputResult, PassengerSnapshotRow, StepSummaryRow, TaxiSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    fn write_taxis(&mut self, rows: &[TaxiSnapshotRow]) -> OutputResult<()>;

    fn write_passengers(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()>;

    fn write_edges(&mut self, rows: &[EdgeSnapshotRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
