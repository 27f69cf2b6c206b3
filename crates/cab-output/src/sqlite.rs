//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! four tables: `taxi_snapshots`, `passenger_snapshots`, `edge_snapshots`
//! and `step_summaries`.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{EdgeSnapshotRow, OutputResult, PassengerSnapshotRow, StepSummaryRow, TaxiSnapshotRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Create `dir` if needed, open (or create) `output.db` in it and
    /// initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS taxi_snapshots (
                 tick         INTEGER NOT NULL,
                 time_mins    REAL    NOT NULL,
                 taxi_id      INTEGER NOT NULL,
                 edge_id      INTEGER NOT NULL,
                 pos          REAL    NOT NULL,
                 x            REAL    NOT NULL,
                 y            REAL    NOT NULL,
                 direction    TEXT    NOT NULL,
                 status       TEXT    NOT NULL,
                 passenger_id INTEGER,
                 frozen       INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS passenger_snapshots (
                 tick         INTEGER NOT NULL,
                 time_mins    REAL    NOT NULL,
                 passenger_id INTEGER NOT NULL,
                 x            REAL    NOT NULL,
                 y            REAL    NOT NULL,
                 status       TEXT    NOT NULL,
                 ready        INTEGER NOT NULL,
                 taxi_id      INTEGER
             );
             CREATE TABLE IF NOT EXISTS edge_snapshots (
                 tick       INTEGER NOT NULL,
                 edge_id    INTEGER NOT NULL,
                 congestion INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS step_summaries (
                 tick                INTEGER PRIMARY KEY,
                 time_mins           REAL    NOT NULL,
                 taxis_available     INTEGER NOT NULL,
                 taxis_preride       INTEGER NOT NULL,
                 taxis_ride          INTEGER NOT NULL,
                 passengers_waiting  INTEGER NOT NULL,
                 passengers_preride  INTEGER NOT NULL,
                 passengers_ride     INTEGER NOT NULL,
                 passengers_postride INTEGER NOT NULL,
                 passengers_finished INTEGER NOT NULL,
                 mean_wait_mins      REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_taxis(&mut self, rows: &[TaxiSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO taxi_snapshots \
                 (tick, time_mins, taxi_id, edge_id, pos, x, y, direction, status, passenger_id, frozen) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.tick as i64,
                    row.time_mins,
                    row.taxi_id,
                    row.edge_id,
                    row.pos,
                    row.x,
                    row.y,
                    row.direction,
                    row.status,
                    row.passenger,
                    row.frozen as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_passengers(&mut self, rows: &[PassengerSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO passenger_snapshots \
                 (tick, time_mins, passenger_id, x, y, status, ready, taxi_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.tick as i64,
                    row.time_mins,
                    row.passenger_id,
                    row.x,
                    row.y,
                    row.status,
                    row.ready as i64,
                    row.taxi,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_edges(&mut self, rows: &[EdgeSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO edge_snapshots (tick, edge_id, congestion) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(params![row.tick as i64, row.edge_id, row.congestion])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries \
             (tick, time_mins, taxis_available, taxis_preride, taxis_ride, \
              passengers_waiting, passengers_preride, passengers_ride, \
              passengers_postride, passengers_finished, mean_wait_mins) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                row.tick as i64,
                row.time_mins,
                row.taxis_available as i64,
                row.taxis_preride as i64,
                row.taxis_ride as i64,
                row.passengers_waiting as i64,
                row.passengers_preride as i64,
                row.passengers_ride as i64,
                row.passengers_postride as i64,
                row.passengers_finished as i64,
                row.mean_wait_mins,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
