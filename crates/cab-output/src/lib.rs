//! `cab-output`: simulation output writers.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                      |
//! |-----------|---------|--------------------------------------------------------------------|
//! | *(none)*  | CSV     | `taxi_snapshots.csv`, `passenger_snapshots.csv`, `edge_snapshots.csv`, `step_summaries.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                        |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `cab_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cab_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_for(120.0, 0.1, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EdgeSnapshotRow, PassengerSnapshotRow, StepSummaryRow, TaxiSnapshotRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
