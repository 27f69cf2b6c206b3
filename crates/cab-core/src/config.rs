//! Top-level simulation configuration.
//!
//! Every rate is "per simulated minute" and every speed is "distance units
//! per simulated minute".  Probabilities for a step of length `Δt` are
//! `rate × Δt`, clamped to `[0, 1]` by [`SimRng::gen_bool`](crate::SimRng::gen_bool).

use crate::{Bounds, CabError, CabResult, Point};

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate (feature
/// `serde`) and passed to the simulation builder.  Fields missing from the
/// file take their [`Default`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Taxi cruising speed on an uncongested road.
    pub taxi_speed: f64,

    /// Pedestrian speed, used for walking to the pick-up point and from the
    /// drop-off point.
    pub walking_speed: f64,

    /// Expected new passengers per minute.
    pub passenger_rate: f64,

    /// Per-edge probability per minute of congestion easing by one level.
    /// Worsening uses half this rate.
    pub congestion_change_rate: f64,

    /// Drives both taxi arrivals (scaled by the fleet shortfall) and
    /// departures (scaled down by the initial fleet size).
    pub taxi_churn_rate: f64,

    /// Minutes a taxi stands still while a passenger boards or alights.
    pub boarding_delay_mins: f64,

    pub initial_taxis: usize,

    pub initial_passengers: usize,

    /// Passengers appear no further than this from some road.
    pub max_passenger_edge_distance: f64,

    /// Taxis never accept a passenger whose pick-up cost exceeds this.
    pub max_pickup_range: f64,

    /// Rectangle in which candidate passenger locations are drawn.
    pub spawn_bounds: Bounds,

    /// Upper bound on rejection-sampling attempts per spawn point.
    pub max_spawn_attempts: u32,

    /// Relative weights of congestion levels 1, 2 and 3 at start-up.
    pub congestion_weights: [u32; 3],

    /// Emit a full snapshot to observers every N steps.  0 disables
    /// snapshots.
    pub output_interval_steps: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                        42,
            taxi_speed:                  30.0,
            walking_speed:               4.0,
            passenger_rate:              0.5,
            congestion_change_rate:      0.004,
            taxi_churn_rate:             0.02,
            boarding_delay_mins:         1.0,
            initial_taxis:               20,
            initial_passengers:          10,
            max_passenger_edge_distance: 50.0,
            max_pickup_range:            600.0,
            spawn_bounds:                Bounds::new(Point::new(0.0, 0.0), Point::new(600.0, 600.0)),
            max_spawn_attempts:          10_000,
            congestion_weights:          [4, 2, 1],
            output_interval_steps:       1,
        }
    }
}

impl SimConfig {
    /// Reject configurations that would stall motion, loop forever while
    /// sampling, or feed nonsense probabilities to the RNG.
    pub fn validate(&self) -> CabResult<()> {
        positive("taxi_speed", self.taxi_speed)?;
        positive("walking_speed", self.walking_speed)?;
        positive("max_passenger_edge_distance", self.max_passenger_edge_distance)?;
        non_negative("passenger_rate", self.passenger_rate)?;
        non_negative("congestion_change_rate", self.congestion_change_rate)?;
        non_negative("taxi_churn_rate", self.taxi_churn_rate)?;
        non_negative("boarding_delay_mins", self.boarding_delay_mins)?;
        non_negative("max_pickup_range", self.max_pickup_range)?;

        if self.spawn_bounds.is_degenerate() {
            return Err(CabError::Config(format!(
                "spawn_bounds {} .. {} must span a finite, non-empty area",
                self.spawn_bounds.min, self.spawn_bounds.max
            )));
        }
        if self.max_spawn_attempts == 0 {
            return Err(CabError::Config("max_spawn_attempts must be at least 1".into()));
        }
        if self.congestion_weights.iter().all(|&w| w == 0) {
            return Err(CabError::Config("congestion_weights must not all be zero".into()));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> CabResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CabError::Config(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> CabResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CabError::Config(format!("{name} must be non-negative, got {value}")))
    }
}
