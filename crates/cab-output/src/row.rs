//! Plain data row types written by output backends.
//!
//! Enum-valued columns are stored as lower-case strings (`"preride"`,
//! `"backward"`, …) and optional ids as SQL `NULL` / an empty CSV field.

use cab_core::SimClock;
use cab_sim::{EdgeView, FleetCounts, PassengerView, TaxiView};

/// One taxi at one snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxiSnapshotRow {
    pub tick:      u64,
    pub time_mins: f64,
    pub taxi_id:   u32,
    pub edge_id:   u32,
    /// Fraction along the edge, `0` at its start vertex.
    pub pos:       f64,
    pub x:         f64,
    pub y:         f64,
    pub direction: &'static str,
    pub status:    &'static str,
    pub passenger: Option<u32>,
    pub frozen:    bool,
}

impl TaxiSnapshotRow {
    pub fn new(clock: &SimClock, view: &TaxiView) -> Self {
        Self {
            tick:      clock.tick.0,
            time_mins: clock.now(),
            taxi_id:   view.id.0,
            edge_id:   view.at.edge.0,
            pos:       view.at.pos,
            x:         view.position.x,
            y:         view.position.y,
            direction: view.dir.as_str(),
            status:    view.status.as_str(),
            passenger: view.passenger.map(|p| p.0),
            frozen:    view.frozen,
        }
    }
}

/// One passenger at one snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassengerSnapshotRow {
    pub tick:         u64,
    pub time_mins:    f64,
    pub passenger_id: u32,
    pub x:            f64,
    pub y:            f64,
    pub status:       &'static str,
    pub ready:        bool,
    pub taxi:         Option<u32>,
}

impl PassengerSnapshotRow {
    pub fn new(clock: &SimClock, view: &PassengerView) -> Self {
        Self {
            tick:         clock.tick.0,
            time_mins:    clock.now(),
            passenger_id: view.id.0,
            x:            view.position.x,
            y:            view.position.y,
            status:       view.status.as_str(),
            ready:        view.ready,
            taxi:         view.taxi.map(|t| t.0),
        }
    }
}

/// Congestion level (1–3) of one edge at one snapshot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSnapshotRow {
    pub tick:       u64,
    pub edge_id:    u32,
    pub congestion: u8,
}

impl EdgeSnapshotRow {
    pub fn new(clock: &SimClock, view: &EdgeView) -> Self {
        Self { tick: clock.tick.0, edge_id: view.id.0, congestion: view.congestion.level() }
    }
}

/// Head counts after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub tick:                u64,
    pub time_mins:           f64,
    pub taxis_available:     u64,
    pub taxis_preride:       u64,
    pub taxis_ride:          u64,
    pub passengers_waiting:  u64,
    pub passengers_preride:  u64,
    pub passengers_ride:     u64,
    pub passengers_postride: u64,
    pub passengers_finished: u64,
    pub mean_wait_mins:      Option<f64>,
}

impl StepSummaryRow {
    pub fn new(clock: &SimClock, counts: &FleetCounts) -> Self {
        Self {
            tick:                clock.tick.0,
            time_mins:           clock.now(),
            taxis_available:     counts.taxis_available as u64,
            taxis_preride:       counts.taxis_preride as u64,
            taxis_ride:          counts.taxis_ride as u64,
            passengers_waiting:  counts.passengers_waiting as u64,
            passengers_preride:  counts.passengers_preride as u64,
            passengers_ride:     counts.passengers_ride as u64,
            passengers_postride: counts.passengers_postride as u64,
            passengers_finished: counts.passengers_finished as u64,
            mean_wait_mins:      counts.mean_wait_mins,
        }
    }
}
