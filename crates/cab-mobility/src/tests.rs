//! Unit tests for cab-mobility.

use cab_core::{EdgeId, Point, TaxiId};
use cab_fleet::{Taxi, TaxiStatus};
use cab_network::{Direction, EdgePos, RoadNetwork, RoadNetworkBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 0 ──e0── 1 ──e1── 2, 100 apart.
fn line() -> RoadNetwork {
    let mut b = RoadNetworkBuilder::new();
    let v0 = b.add_vertex(Point::new(0.0, 0.0), "west");
    let v1 = b.add_vertex(Point::new(100.0, 0.0), "middle");
    let v2 = b.add_vertex(Point::new(200.0, 0.0), "east");
    b.add_edge(v0, v1);
    b.add_edge(v1, v2);
    b.build().unwrap()
}

/// A T-junction.  Vertex 0 is the hub; every edge but e0 starts there.
///
/// ```text
///             3
///             │ e2
///   1 ──e0──▶ 0 ──e1── 2
/// ```
fn tee() -> RoadNetwork {
    let mut b = RoadNetworkBuilder::new();
    let hub = b.add_vertex(Point::new(100.0, 100.0), "hub");
    let w = b.add_vertex(Point::new(0.0, 100.0), "w");
    let e = b.add_vertex(Point::new(200.0, 100.0), "e");
    let n = b.add_vertex(Point::new(100.0, 200.0), "n");
    b.add_edge(w, hub);
    b.add_edge(hub, e);
    b.add_edge(hub, n);
    b.build().unwrap()
}

fn taxi_at(edge: u32, pos: f64, dir: Direction) -> Taxi {
    Taxi::new(TaxiId(0), EdgePos::new(EdgeId(edge), pos), dir)
}

// ── advance_taxi ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance {
    use cab_network::Congestion;

    use super::*;
    use crate::{TaxiEvent, advance_taxi};

    #[test]
    fn moves_speed_over_cost() {
        let net = line();
        let mut t = taxi_at(0, 0.0, Direction::Forward);
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 25.0), None);
        assert_eq!(t.at, EdgePos::new(EdgeId(0), 0.25));

        let mut t = taxi_at(0, 0.5, Direction::Backward);
        advance_taxi(&mut t, &net, 0.5, 50.0);
        assert_eq!(t.at.pos, 0.25);
    }

    #[test]
    fn congestion_slows_progress() {
        let mut net = line();
        net.set_congestion(EdgeId(0), Congestion::Medium);
        net.refresh_index();
        let mut t = taxi_at(0, 0.0, Direction::Forward);
        advance_taxi(&mut t, &net, 1.0, 25.0);
        assert_eq!(t.at.pos, 0.125);
    }

    #[test]
    fn stopped_taxi_stays_put() {
        let net = line();
        let mut t = taxi_at(0, 0.4, Direction::Stopped);
        assert_eq!(advance_taxi(&mut t, &net, 10.0, 30.0), None);
        assert_eq!(t.at.pos, 0.4);
    }

    #[test]
    fn overshoot_clamps_at_endpoint() {
        let net = line();
        let mut t = taxi_at(1, 0.9, Direction::Forward);
        advance_taxi(&mut t, &net, 1.0, 30.0);
        assert_eq!(t.at.pos, 1.0);
        assert!(t.at_junction());

        let mut t = taxi_at(1, 0.1, Direction::Backward);
        advance_taxi(&mut t, &net, 1.0, 30.0);
        assert_eq!(t.at.pos, 0.0);
        assert!(t.at_junction());
    }

    #[test]
    fn crossing_pickup_reports_event() {
        let net = line();
        let mut t = taxi_at(0, 0.3, Direction::Forward);
        t.status = TaxiStatus::Preride;
        t.dest = Some(EdgePos::new(EdgeId(0), 0.5));
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 30.0), Some(TaxiEvent::ReachedPickup));
    }

    #[test]
    fn landing_exactly_on_destination_is_not_yet_arrival() {
        let net = line();
        let mut t = taxi_at(0, 0.25, Direction::Forward);
        t.status = TaxiStatus::Preride;
        t.dest = Some(EdgePos::new(EdgeId(0), 0.5));
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 25.0), None);
        assert_eq!(t.at.pos, 0.5);
        // The next step carries it past.
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 25.0), Some(TaxiEvent::ReachedPickup));
    }

    #[test]
    fn destination_on_other_edge_is_ignored() {
        let net = line();
        let mut t = taxi_at(0, 0.3, Direction::Forward);
        t.status = TaxiStatus::Ride;
        t.dest = Some(EdgePos::new(EdgeId(1), 0.0));
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 90.0), None);
        assert_eq!(t.at.pos, 1.0);
    }

    #[test]
    fn crossing_dropoff_backward_reports_event() {
        let net = line();
        let mut t = taxi_at(1, 0.6, Direction::Backward);
        t.status = TaxiStatus::Ride;
        t.dest = Some(EdgePos::new(EdgeId(1), 0.5));
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 30.0), Some(TaxiEvent::ReachedDropoff));
    }

    #[test]
    fn available_taxi_never_arrives() {
        let net = line();
        let mut t = taxi_at(0, 0.3, Direction::Forward);
        t.dest = Some(EdgePos::new(EdgeId(0), 0.5));
        assert_eq!(advance_taxi(&mut t, &net, 1.0, 30.0), None);
    }
}

// ── Junctions ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod junction {
    use std::collections::HashSet;

    use cab_core::{SimRng, VertexId};
    use cab_network::{Congestion, NextHopRouter};

    use super::*;
    use crate::{at_junction, random_turn, turn_at_junction};

    #[test]
    fn reports_vertex_being_entered() {
        let net = tee();
        assert_eq!(at_junction(&taxi_at(0, 1.0, Direction::Forward), &net), Some(VertexId(0)));
        assert_eq!(at_junction(&taxi_at(0, 0.0, Direction::Backward), &net), Some(VertexId(1)));
        assert_eq!(at_junction(&taxi_at(0, 1.0, Direction::Backward), &net), None);
        assert_eq!(at_junction(&taxi_at(0, 0.5, Direction::Forward), &net), None);
    }

    #[test]
    fn random_turn_avoids_u_turn() {
        let net = tee();
        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = SimRng::new(seed);
            let e = random_turn(&net, VertexId(0), EdgeId(0), &mut rng);
            assert_ne!(e, EdgeId(0));
            seen.insert(e);
        }
        assert_eq!(seen, HashSet::from([EdgeId(1), EdgeId(2)]));
    }

    #[test]
    fn random_turn_prefers_least_congested() {
        let mut net = tee();
        net.set_congestion(EdgeId(1), Congestion::Severe);
        net.refresh_index();
        for seed in 0..32 {
            let mut rng = SimRng::new(seed);
            assert_eq!(random_turn(&net, VertexId(0), EdgeId(0), &mut rng), EdgeId(2));
        }
    }

    #[test]
    fn dead_end_turns_back() {
        let net = tee();
        let mut rng = SimRng::new(1);
        assert_eq!(random_turn(&net, VertexId(1), EdgeId(0), &mut rng), EdgeId(0));

        let mut t = taxi_at(0, 0.0, Direction::Backward);
        turn_at_junction(&mut t, &net, &NextHopRouter, &mut rng);
        assert_eq!(t.at, EdgePos::at_start(EdgeId(0)));
        assert_eq!(t.dir, Direction::Forward);
    }

    #[test]
    fn free_taxi_enters_new_edge_at_hub() {
        let net = tee();
        let mut rng = SimRng::new(3);
        let mut t = taxi_at(0, 1.0, Direction::Forward);
        turn_at_junction(&mut t, &net, &NextHopRouter, &mut rng);
        assert!(t.at.edge == EdgeId(1) || t.at.edge == EdgeId(2));
        assert_eq!(t.at.pos, 0.0);
        assert_eq!(t.dir, Direction::Forward);
    }

    #[test]
    fn busy_taxi_follows_router() {
        let net = tee();
        let mut rng = SimRng::new(3);
        let mut t = taxi_at(0, 1.0, Direction::Forward);
        t.status = TaxiStatus::Preride;
        t.dest = Some(EdgePos::new(EdgeId(2), 0.5));
        turn_at_junction(&mut t, &net, &NextHopRouter, &mut rng);
        assert_eq!(t.at, EdgePos::at_start(EdgeId(2)));
        assert_eq!(t.dir, Direction::Forward);
    }

    #[test]
    fn not_at_junction_is_noop() {
        let net = tee();
        let mut rng = SimRng::new(3);
        let mut t = taxi_at(1, 0.5, Direction::Forward);
        let before = t.clone();
        turn_at_junction(&mut t, &net, &NextHopRouter, &mut rng);
        assert_eq!(t, before);
    }

    #[test]
    fn helper_ids_line_up() {
        // Guard the fixture: e0 ends at the hub, e1/e2 start there.
        let net = tee();
        assert_eq!(net.edge(EdgeId(0)).end, VertexId(0));
        assert_eq!(net.edge(EdgeId(1)).start, VertexId(0));
        assert_eq!(net.edge(EdgeId(2)).start, VertexId(0));
    }
}

// ── Walking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod walking {
    use cab_core::{EdgeId, PassengerId, Point, TaxiId};
    use cab_fleet::{Passenger, PassengerStatus};
    use cab_network::{EdgePos, TripPoint};

    use crate::{PassengerEvent, walk_passenger, walk_toward};

    fn passenger() -> Passenger {
        let origin = TripPoint {
            coord: Point::new(50.0, 6.0),
            anchor: EdgePos::new(EdgeId(0), 0.5),
            near: Point::new(50.0, 0.0),
        };
        let destination = TripPoint {
            coord: Point::new(150.0, 8.0),
            anchor: EdgePos::new(EdgeId(1), 0.5),
            near: Point::new(150.0, 0.0),
        };
        Passenger::new(PassengerId(0), origin, destination, 0.0)
    }

    #[test]
    fn partial_step() {
        let mut p = Point::new(0.0, 0.0);
        assert!(!walk_toward(&mut p, Point::new(10.0, 0.0), 4.0));
        assert_eq!(p, Point::new(4.0, 0.0));
    }

    #[test]
    fn snaps_when_within_one_step() {
        let mut p = Point::new(0.0, 0.0);
        assert!(walk_toward(&mut p, Point::new(3.0, 0.0), 4.0));
        assert_eq!(p, Point::new(3.0, 0.0));
    }

    #[test]
    fn already_there() {
        let mut p = Point::new(2.0, 2.0);
        assert!(walk_toward(&mut p, Point::new(2.0, 2.0), 0.0));
    }

    #[test]
    fn waiting_passenger_does_not_walk() {
        let mut p = passenger();
        assert_eq!(walk_passenger(&mut p, 4.0), None);
        assert_eq!(p.position, Point::new(50.0, 6.0));
    }

    #[test]
    fn assigned_passenger_walks_to_road_then_is_ready() {
        let mut p = passenger();
        p.assign(TaxiId(0));
        assert_eq!(walk_passenger(&mut p, 4.0), None);
        assert!(p.position.distance(Point::new(50.0, 2.0)) < 1e-9);
        assert_eq!(walk_passenger(&mut p, 4.0), Some(PassengerEvent::ReachedPickup));
        assert!(p.ready);
        assert_eq!(p.position, Point::new(50.0, 0.0));
        // Ready passengers wait in place.
        assert_eq!(walk_passenger(&mut p, 4.0), None);
    }

    #[test]
    fn dropped_off_passenger_walks_to_destination() {
        let mut p = passenger();
        p.assign(TaxiId(0));
        p.board(1.0);
        assert_eq!(walk_passenger(&mut p, 4.0), None); // riding
        p.alight(Point::new(150.0, 0.0));
        assert_eq!(walk_passenger(&mut p, 5.0), None);
        assert_eq!(walk_passenger(&mut p, 5.0), Some(PassengerEvent::ReachedDestination));
        assert_eq!(p.position, Point::new(150.0, 8.0));
        assert_eq!(p.status, PassengerStatus::Postride);
    }
}
