//! The campus road map shared by `campus` (the sim) and `export_network`
//! (the sidecar).
//!
//! Twelve landmarks joined by twenty two-way roads on a 600 × 600 canvas.
//! Source coordinates are screen-space (y down); they are flipped so that y
//! grows northwards.

use anyhow::Result;

use cab_core::Point;
use cab_network::{NetworkDefinition, RoadNetwork, RoadNetworkBuilder};

const HEIGHT: f64 = 600.0;

const LANDMARKS: [(&str, f64, f64); 12] = [
    ("South Gate",          25.0,   3.0),
    ("Main Gate",          225.0,   3.0),
    ("Southeast Gate",     500.0,   3.0),
    ("Cafeteria 2",          3.0, 125.0),
    ("Main Building",      225.0, 100.0),
    ("Xueyan Building",    600.0,  60.0),
    ("Tianjiabin",          25.0, 250.0),
    ("Library",            350.0, 250.0),
    ("Playground",           3.0, 350.0),
    ("New Cafeteria",      550.0, 450.0),
    ("North Gate",         220.0, 600.0),
    ("Students Dormitory", 440.0, 550.0),
];

const ROADS: [(u32, u32); 20] = [
    (0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 4), (4, 5), (3, 6), (4, 6), (4, 7),
    (5, 7), (5, 9), (6, 7), (6, 8), (6, 10), (7, 11), (7, 9), (8, 10), (10, 11), (9, 11),
];

pub fn campus_definition() -> NetworkDefinition {
    NetworkDefinition {
        vertices: LANDMARKS
            .iter()
            .map(|&(label, x, y)| (Point::new(x, HEIGHT - y), label.to_owned()))
            .collect(),
        edges: ROADS.to_vec(),
    }
}

/// Build the campus network.  All edges start at `Low` congestion; the
/// simulation builder draws the real start-up levels.
pub fn build_network() -> Result<RoadNetwork> {
    Ok(RoadNetworkBuilder::from_definition(&campus_definition()).build()?)
}
