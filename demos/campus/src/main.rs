//! campus: taxi dispatch on a 12-landmark university campus.
//!
//! ```text
//! cargo run -p campus --release [-- path/to/config.json]
//! RUST_LOG=cab_sim=debug cargo run -p campus
//! ```
//!
//! Without a config file the built-in defaults are used (20 taxis, 10
//! waiting passengers, half a new passenger per minute).  Fields missing
//! from the file keep their defaults.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::info;

use cab_core::{SimClock, SimConfig};
use cab_dispatch::NearestTaxi;
use cab_network::NextHopRouter;
use cab_output::writer::OutputWriter;
use cab_output::{CsvWriter, SimOutputObserver};
use cab_sim::{FleetCounts, SimBuilder, SimObserver, Snapshot};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_MINUTES:           f64 = 240.0;
const DT_MINS:               f64 = 0.1;
const OUTPUT_INTERVAL_STEPS: u64 = 10; // one snapshot per simulated minute
const OUTPUT_DIR:            &str = "output/campus";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    taxi_rows:      usize,
    passenger_rows: usize,
    summary_rows:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, taxi_rows: 0, passenger_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_step_end(&mut self, clock: &SimClock, counts: &FleetCounts) {
        self.summary_rows += 1;
        if clock.tick.0.is_multiple_of(600) {
            info!(
                "{clock}: {} taxis, {} waiting, {} riding, {} finished",
                counts.taxis(),
                counts.passengers_waiting,
                counts.passengers_ride,
                counts.passengers_finished
            );
        }
        self.inner.on_step_end(clock, counts);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.taxi_rows += snapshot.taxis.len();
        self.passenger_rows += snapshot.passengers.len();
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, clock: &SimClock) {
        self.inner.on_sim_end(clock);
    }
}

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig { output_interval_steps: OUTPUT_INTERVAL_STEPS, ..SimConfig::default() });
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config: SimConfig = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    config.validate().with_context(|| format!("validating {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;

    println!("=== campus — taxi dispatch simulation ===");
    println!(
        "Taxis: {}  |  Passengers: {}  |  Minutes: {SIM_MINUTES}  |  Seed: {}",
        config.initial_taxis, config.initial_passengers, config.seed
    );
    println!();

    // 1. Road network.
    let network = build_network()?;
    println!("Road network: {} vertices, {} edges", network.vertex_count(), network.edge_count());

    // 2. Sim.
    let mut sim = SimBuilder::new(config, network, NearestTaxi, NextHopRouter).build()?;

    // 3. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run_for(SIM_MINUTES, DT_MINS, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let counts = sim.counts();
    println!("Simulation complete in {:.3} s ({} simulated)", elapsed.as_secs_f64(), sim.clock);
    println!("  step_summaries.csv      : {} rows", obs.summary_rows);
    println!("  taxi_snapshots.csv      : {} rows", obs.taxi_rows);
    println!("  passenger_snapshots.csv : {} rows", obs.passenger_rows);
    println!();
    println!(
        "Passengers: {} finished, {} riding, {} waiting ({} total)",
        counts.passengers_finished,
        counts.passengers_ride,
        counts.passengers_waiting,
        counts.passengers()
    );
    match counts.mean_wait_mins {
        Some(w) => println!("Mean wait for pickup: {w:.2} min"),
        None => println!("Mean wait for pickup: n/a (no pickups)"),
    }
    println!();

    // 6. Final taxi table.
    println!("{:<12} {:<10} {:<26} {:<10}", "Taxi", "Status", "Road", "Passenger");
    println!("{}", "-".repeat(60));
    for (id, taxi) in sim.taxis.iter() {
        let edge = sim.network.edge(taxi.at.edge);
        let road = format!(
            "{} – {}",
            sim.network.vertex(edge.start).label,
            sim.network.vertex(edge.end).label
        );
        println!(
            "{:<12} {:<10} {:<26} {:<10}",
            id.to_string(),
            taxi.status.as_str(),
            road,
            taxi.passenger.map(|p| p.to_string()).unwrap_or_default(),
        );
    }

    Ok(())
}
