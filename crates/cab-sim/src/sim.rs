//! The `Sim` struct and its step loop.

use log::{debug, trace};

use cab_core::{SimClock, SimConfig, SimRng, TaxiId};
use cab_dispatch::{Dispatcher, allocate};
use cab_fleet::{PassengerStore, TaxiStatus, TaxiStore};
use cab_mobility::{PassengerEvent, TaxiEvent, advance_taxi, turn_at_junction, walk_passenger};
use cab_network::{Direction, RoadNetwork, Router};

use crate::evolve::{churn_taxis, evolve_congestion, join_probability, leave_probability, spawn_passenger, spawn_taxi};
use crate::{FleetCounts, SimError, SimObserver, SimResult, Snapshot};

/// The simulation context: the road network, every taxi and passenger, the
/// clock, the RNG and the two pluggable policies.
///
/// One `Sim` is one independent world.  All mutation happens inside
/// [`step`](Self::step); between steps the public fields may be inspected
/// freely.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: Dispatcher, R: Router> {
    pub config: SimConfig,
    pub clock: SimClock,
    pub network: RoadNetwork,
    pub taxis: TaxiStore,
    pub passengers: PassengerStore,
    pub dispatcher: D,
    pub router: R,
    pub(crate) rng: SimRng,
}

impl<D: Dispatcher, R: Router> Sim<D, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the world by `dt` simulated minutes and return the resulting
    /// snapshot.
    ///
    /// # Errors
    ///
    /// - [`SimError::Config`] if `dt` is negative or not finite.
    /// - [`SimError::Network`] if a new passenger could not be placed within
    ///   `max_spawn_attempts`.
    pub fn step(&mut self, dt: f64) -> SimResult<Snapshot> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::Config(format!("step length must be a non-negative number of minutes, got {dt}")));
        }
        if self.network.refresh_index() {
            debug!("{}: index rebuilt after an external congestion change", self.clock);
        }
        self.clock.advance(dt);
        let now = self.clock.now();

        self.move_taxis(dt, now);
        self.move_passengers(dt, now);
        self.reconcile_pickups(now);

        let changed = evolve_congestion(&mut self.network, &mut self.rng, self.config.congestion_change_rate, dt);
        if changed > 0 {
            debug!("{}: congestion changed on {changed} edge(s)", self.clock);
        }

        self.spawn_and_churn(dt, now)?;

        let assigned = allocate(
            &self.network,
            &self.router,
            &self.dispatcher,
            &mut self.taxis,
            &mut self.passengers,
            self.config.max_pickup_range,
        );
        if !assigned.is_empty() {
            debug!("{}: {} assignment(s)", self.clock, assigned.len());
        }

        Ok(self.snapshot())
    }

    /// Run exactly `n` steps of `dt` minutes, reporting to `observer`.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, dt: f64, observer: &mut O) -> SimResult<()> {
        let interval = self.config.output_interval_steps;
        for _ in 0..n {
            observer.on_step_start(&self.clock);
            let snapshot = self.step(dt)?;
            observer.on_step_end(&self.clock, &snapshot.counts);
            if interval > 0 && self.clock.tick.0.is_multiple_of(interval) {
                observer.on_snapshot(&snapshot);
            }
        }
        observer.on_sim_end(&self.clock);
        Ok(())
    }

    /// Run for `minutes` of simulated time in steps of `dt` (the last step
    /// is not shortened, so the run may overshoot by less than `dt`).
    pub fn run_for<O: SimObserver>(&mut self, minutes: f64, dt: f64, observer: &mut O) -> SimResult<()> {
        if !(dt.is_finite() && dt > 0.0) || !(minutes.is_finite() && minutes >= 0.0) {
            return Err(SimError::Config(format!("cannot run {minutes} minutes in steps of {dt}")));
        }
        let steps = (minutes / dt).ceil() as u64;
        self.run_steps(steps, dt, observer)
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.clock, &self.network, &self.taxis, &self.passengers)
    }

    pub fn counts(&self) -> FleetCounts {
        FleetCounts::tally(&self.taxis, &self.passengers)
    }

    // ── Step phases ───────────────────────────────────────────────────────

    fn move_taxis(&mut self, dt: f64, now: f64) {
        let speed = self.config.taxi_speed;
        let delay = self.config.boarding_delay_mins;

        for id in self.taxis.ids() {
            let Some(taxi) = self.taxis.get_mut(id) else {
                continue;
            };
            if taxi.is_frozen(now) {
                continue;
            }

            match advance_taxi(taxi, &self.network, dt, speed) {
                Some(TaxiEvent::ReachedPickup) => {
                    if let Some(dest) = taxi.dest {
                        taxi.stop_at(dest.pos);
                    }
                    taxi.freeze_until(now + delay);
                    trace!("{id} waiting at pickup for {:?}", taxi.passenger);
                }
                Some(TaxiEvent::ReachedDropoff) => {
                    if self.end_ride(id, now + delay) {
                        continue;
                    }
                }
                None => {}
            }

            if let Some(taxi) = self.taxis.get_mut(id) {
                turn_at_junction(taxi, &self.network, &self.router, &mut self.rng);
            }
        }
    }

    /// Drop the passenger off where the taxi stands.  Returns `true` if the
    /// taxi then left the fleet.
    fn end_ride(&mut self, id: TaxiId, free_at: f64) -> bool {
        let Some(taxi) = self.taxis.get_mut(id) else {
            return true;
        };
        let at = self.network.point_at(taxi.at);
        let leaving = taxi.pending_removal;
        if let Some(pid) = taxi.finish_ride(free_at) {
            if let Some(passenger) = self.passengers.get_mut(pid) {
                passenger.alight(at);
            }
            debug!("{id} dropped off {pid} at {at}");
        }
        if leaving {
            self.taxis.remove(id);
            debug!("{id} left the fleet after its last job");
        }
        leaving
    }

    fn move_passengers(&mut self, dt: f64, now: f64) {
        let step = self.config.walking_speed * dt;
        for (id, passenger) in self.passengers.iter_mut() {
            match walk_passenger(passenger, step) {
                Some(PassengerEvent::ReachedPickup) => trace!("{id} ready at pickup"),
                Some(PassengerEvent::ReachedDestination) => {
                    passenger.finish(now);
                    debug!("{id} finished");
                }
                None => {}
            }
        }
    }

    /// Start every ride whose taxi is stopped at the pickup and whose
    /// passenger is standing there.  Either side may have arrived last.
    fn reconcile_pickups(&mut self, now: f64) {
        for id in self.taxis.ids() {
            let Some(taxi) = self.taxis.get_mut(id) else {
                continue;
            };
            if taxi.status != TaxiStatus::Preride || taxi.dir != Direction::Stopped {
                continue;
            }
            let Some(pid) = taxi.passenger else {
                continue;
            };
            let Some(passenger) = self.passengers.get_mut(pid) else {
                continue;
            };
            if !passenger.ready {
                continue;
            }

            let dropoff = passenger.destination.anchor;
            let heading = self.router.direction(&self.network, taxi.at, dropoff);
            taxi.start_ride(dropoff, heading);
            passenger.board(now);
            debug!("{id} picked up {pid} ({:.1} to go)", heading.cost);
        }
    }

    fn spawn_and_churn(&mut self, dt: f64, now: f64) -> SimResult<()> {
        if self.rng.gen_bool(self.config.passenger_rate * dt) {
            spawn_passenger(&mut self.passengers, &self.network, &mut self.rng, &self.config, now)?;
        }

        if self.rng.gen_bool(join_probability(&self.config, self.taxis.len(), dt)) {
            spawn_taxi(&mut self.taxis, &self.network, &mut self.rng);
        }

        let (removed, flagged) = churn_taxis(&mut self.taxis, &mut self.rng, leave_probability(&self.config, dt));
        if removed + flagged > 0 {
            trace!("{}: {removed} taxi(s) left, {flagged} flagged", self.clock);
        }
        Ok(())
    }
}
