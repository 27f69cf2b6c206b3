//! Fluent builder for constructing a [`Sim`].

use log::info;

use cab_core::{SimClock, SimConfig, SimRng};
use cab_dispatch::Dispatcher;
use cab_fleet::{Passenger, PassengerStore, Taxi, TaxiStore};
use cab_network::{Direction, EdgePos, RoadNetwork, Router, TripPoint};

use crate::evolve::{randomize_congestion, spawn_passenger, spawn_taxi};
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<D, R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: speeds, rates, initial counts, seed, …
/// - [`RoadNetwork`]: from [`cab_network::RoadNetworkBuilder`]
/// - `D: Dispatcher`: the assignment policy (e.g. [`cab_dispatch::NearestTaxi`])
/// - `R: Router`: the routing policy (e.g. [`cab_network::NextHopRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                                  |
/// |------------------------------|------------------------------------------|
/// | `.randomize_congestion(b)`   | `true`: draw levels from `congestion_weights` |
/// | `.random_population(b)`      | `true`: spawn `initial_taxis` / `initial_passengers` |
/// | `.taxi(at, dir)`             | none; explicit taxis come before random ones |
/// | `.passenger(origin, dest)`   | none; explicit trips come before random ones |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network, NearestTaxi, NextHopRouter)
///     .randomize_congestion(false)
///     .random_population(false)
///     .taxi(EdgePos::at_start(EdgeId(0)), Direction::Forward)
///     .build()?;
/// ```
pub struct SimBuilder<D: Dispatcher, R: Router> {
    config:               SimConfig,
    network:              RoadNetwork,
    dispatcher:           D,
    router:               R,
    randomize_congestion: bool,
    random_population:    bool,
    taxis:                Vec<(EdgePos, Direction)>,
    trips:                Vec<(TripPoint, TripPoint)>,
}

impl<D: Dispatcher, R: Router> SimBuilder<D, R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, network: RoadNetwork, dispatcher: D, router: R) -> Self {
        Self {
            config,
            network,
            dispatcher,
            router,
            randomize_congestion: true,
            random_population: true,
            taxis: Vec::new(),
            trips: Vec::new(),
        }
    }

    /// Whether to overwrite the network's congestion with random start-up
    /// levels.  Turn off to keep the levels the network was built with.
    pub fn randomize_congestion(mut self, yes: bool) -> Self {
        self.randomize_congestion = yes;
        self
    }

    /// Whether to spawn the configured initial numbers of random taxis and
    /// passengers.
    pub fn random_population(mut self, yes: bool) -> Self {
        self.random_population = yes;
        self
    }

    /// Place an available taxi.  `dir` must be `Forward` or `Backward`; a
    /// free taxi cruises, so [`build`](Self::build) rejects `Stopped`.
    pub fn taxi(mut self, at: EdgePos, dir: Direction) -> Self {
        self.taxis.push((at, dir));
        self
    }

    /// Add a waiting passenger with a given trip.
    pub fn passenger(mut self, origin: TripPoint, destination: TripPoint) -> Self {
        self.trips.push((origin, destination));
        self
    }

    /// Validate inputs, lay out the initial world and return a ready-to-step
    /// [`Sim`].
    ///
    /// RNG draws happen in this order: congestion, random taxis, random
    /// passengers.
    pub fn build(self) -> SimResult<Sim<D, R>> {
        self.config.validate()?;
        let mut network = self.network;
        if network.edge_count() == 0 {
            return Err(SimError::Config("road network has no edges".into()));
        }

        let edge_count = network.edge_count();
        let check_edge = |at: EdgePos, what: &str| -> SimResult<()> {
            if at.edge.index() >= edge_count {
                return Err(SimError::Config(format!("{what} refers to missing {}", at.edge)));
            }
            Ok(())
        };
        for &(at, dir) in &self.taxis {
            check_edge(at, "explicit taxi")?;
            if dir == Direction::Stopped {
                return Err(SimError::Config(format!("explicit taxi on {} must be moving", at.edge)));
            }
        }
        for (origin, destination) in &self.trips {
            check_edge(origin.anchor, "explicit trip origin")?;
            check_edge(destination.anchor, "explicit trip destination")?;
        }

        let mut rng = SimRng::new(self.config.seed);
        if self.randomize_congestion {
            randomize_congestion(&mut network, &mut rng, &self.config.congestion_weights);
        }

        let mut taxis = TaxiStore::new();
        for (at, dir) in self.taxis {
            taxis.insert_with(|id| Taxi::new(id, at, dir));
        }
        let mut passengers = PassengerStore::new();
        for (origin, destination) in self.trips {
            passengers.insert_with(|id| Passenger::new(id, origin, destination, 0.0));
        }

        if self.random_population {
            for _ in 0..self.config.initial_taxis {
                spawn_taxi(&mut taxis, &network, &mut rng);
            }
            for _ in 0..self.config.initial_passengers {
                spawn_passenger(&mut passengers, &network, &mut rng, &self.config, 0.0)?;
            }
        }

        info!(
            "simulation built: {} edges, {} taxis, {} passengers, seed {}",
            edge_count,
            taxis.len(),
            passengers.len(),
            self.config.seed
        );

        Ok(Sim {
            clock: SimClock::new(),
            config: self.config,
            network,
            taxis,
            passengers,
            dispatcher: self.dispatcher,
            router: self.router,
            rng,
        })
    }
}
