//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `taxi_snapshots.csv`
//! - `passenger_snapshots.csv`
//! - `edge_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EdgeSnapshotRow, OutputResult, PassengerSnapshotRow, StepSummaryRow, TaxiSnapshotRow};

pub const TAXI_HEADER: [&str; 11] =
    ["tick", "time_mins", "taxi_id", "edge_id", "pos", "x", "y", "direction", "status", "passenger_id", "frozen"];
pub const PASSENGER_HEADER: [&str; 8] =
    ["tick", "time_mins", "passenger_id", "x", "y", "status", "ready", "taxi_id"];
pub const EDGE_HEADER: [&str; 3] = ["tick", "edge_id", "congestion"];
pub const SUMMARY_HEADER: [&str; 11] = [
    "tick",
    "time_mins",
    "taxis_available",
    "taxis_preride",
    "taxis_ride",
    "passengers_waiting",
    "passengers_preride",
    "passengers_ride",
    "passengers_postride",
    "passengers_finished",
    "mean_wait_mins",
];

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    taxis:      Writer<File>,
    passengers: Writer<File>,
    edges:      Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the four CSV files in it
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let open = |name: &str, header: &[&str]| -> OutputResult<Writer<File>> {
            let mut w = Writer::from_path(dir.join(name))?;
            w.write_record(header)?;
            Ok(w)
        };

        Ok(Self {
            taxis:      open("taxi_snapshots.csv", &TAXI_HEADER)?,
            passengers: open("passenger_snapshots.csv", &PASSENGER_HEADER)?,
            edges:      open("edge_snapshots.csv", &EDGE_HEADER)?,
            summaries:  open("step_summaries.csv", &SUMMARY_HEADER)?,
            finished:   false,
        })
    }
}

/// Empty field for `None`.
fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_taxis(&mut self, rows: &[TaxiSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.taxis.write_record(&[
                row.tick.to_string(),
                row.time_mins.to_string(),
                row.taxi_id.to_string(),
                row.edge_id.to_string(),
                row.pos.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.direction.to_string(),
                row.status.to_string(),
                opt(row.passenger),
                (row.frozen as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_passengers(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.passengers.write_record(&[
                row.tick.to_string(),
                row.time_mins.to_string(),
                row.passenger_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.status.to_string(),
                (row.ready as u8).to_string(),
                opt(row.taxi),
            ])?;
        }
        Ok(())
    }

    fn write_edges(&mut self, rows: &[EdgeSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.tick.to_string(),
                row.edge_id.to_string(),
                row.congestion.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.time_mins.to_string(),
            row.taxis_available.to_string(),
            row.taxis_preride.to_string(),
            row.taxis_ride.to_string(),
            row.passengers_waiting.to_string(),
            row.passengers_preride.to_string(),
            row.passengers_ride.to_string(),
            row.passengers_postride.to_string(),
            row.passengers_finished.to_string(),
            opt(row.mean_wait_mins),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.taxis.flush()?;
        self.passengers.flush()?;
        self.edges.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
