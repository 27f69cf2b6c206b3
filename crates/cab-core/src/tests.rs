//! Unit tests for cab-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, PassengerId, TaxiId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = TaxiId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TaxiId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PassengerId(0) < PassengerId(1));
        assert!(VertexId(100) > VertexId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TaxiId::INVALID.0, u32::MAX);
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(EdgeId(7).to_string(), "EdgeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Point};

    #[test]
    fn distance_345() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(20.0, 30.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(10.0, 20.0));
    }

    #[test]
    fn projection_inside_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        let p = Point::new(25.0, 40.0);
        assert!((p.project_onto_segment(a, b) - 0.25).abs() < 1e-12);
        assert!((p.distance_to_segment(a, b) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn projection_clamps_beyond_ends() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        // Before the start: nearest point is `a`.
        let before = Point::new(-30.0, 40.0);
        assert_eq!(before.project_onto_segment(a, b), 0.0);
        assert!((before.distance_to_segment(a, b) - 50.0).abs() < 1e-12);
        // Past the end: nearest point is `b`.
        let after = Point::new(130.0, -40.0);
        assert_eq!(after.project_onto_segment(a, b), 1.0);
        assert!((after.distance_to_segment(a, b) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_segment() {
        let a = Point::new(5.0, 5.0);
        let p = Point::new(8.0, 9.0);
        assert_eq!(p.project_onto_segment(a, a), 0.0);
        assert!((p.distance_to_segment(a, a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_degenerate_and_contains() {
        let b = Bounds::new(Point::new(0.0, 0.0), Point::new(600.0, 600.0));
        assert!(!b.is_degenerate());
        assert!(b.contains(Point::new(0.0, 599.9)));
        assert!(!b.contains(Point::new(600.0, 10.0)));

        let flat = Bounds::new(Point::new(0.0, 0.0), Point::new(600.0, 0.0));
        assert!(flat.is_degenerate());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_offset() {
        assert_eq!(Tick(10).offset(5), Tick(15));
        assert_eq!(Tick::ZERO.to_string(), "T0");
    }

    #[test]
    fn clock_advance_counts_steps_and_minutes() {
        let mut c = SimClock::new();
        c.advance(0.25);
        c.advance(0.25);
        assert_eq!(c.tick, Tick(2));
        assert!((c.now() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clock_formats_hms() {
        let mut c = SimClock::new();
        c.advance(61.5); // 1 h 1 min 30 s
        assert_eq!(c.elapsed_hms(), (1, 1, 30));
        assert_eq!(c.to_string(), "01:01:30");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps_out_of_range() {
        let mut r = SimRng::new(3);
        // Probabilities outside [0, 1] must not panic.
        assert!(r.gen_bool(5.0));
        assert!(!r.gen_bool(-1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = SimRng::new(3);
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
        assert_eq!(r.choose(&[9]), Some(&9));
    }

    #[test]
    fn weighted_index_respects_zero_weights() {
        let mut r = SimRng::new(11);
        for _ in 0..200 {
            assert_eq!(r.weighted_index(&[0, 5, 0]), Some(1));
        }
        assert_eq!(r.weighted_index(&[0, 0, 0]), None);
        assert_eq!(r.weighted_index(&[]), None);
    }

    #[test]
    fn gen_range_within_bounds() {
        let mut r = SimRng::new(5);
        for _ in 0..1_000 {
            let v: f64 = r.gen_range(10.0..20.0);
            assert!((10.0..20.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{Bounds, CabError, Point, SimConfig};

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn default_matches_reference_parameters() {
        let c = SimConfig::default();
        assert_eq!(c.taxi_speed, 30.0);
        assert_eq!(c.walking_speed, 4.0);
        assert_eq!(c.initial_taxis, 20);
        assert_eq!(c.initial_passengers, 10);
        assert_eq!(c.max_pickup_range, 600.0);
    }

    #[test]
    fn zero_speed_rejected() {
        let c = SimConfig { taxi_speed: 0.0, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(CabError::Config(_))));
    }

    #[test]
    fn negative_rate_rejected() {
        let c = SimConfig { passenger_rate: -0.1, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn nan_rejected() {
        let c = SimConfig { walking_speed: f64::NAN, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let c = SimConfig {
            spawn_bounds: Bounds::new(Point::new(10.0, 10.0), Point::new(10.0, 500.0)),
            ..SimConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn infinite_bounds_rejected() {
        let wide = SimConfig {
            spawn_bounds: Bounds::new(Point::new(0.0, 0.0), Point::new(f64::INFINITY, 600.0)),
            ..SimConfig::default()
        };
        assert!(wide.validate().is_err());

        let overflowing = SimConfig {
            spawn_bounds: Bounds::new(Point::new(-f64::MAX, 0.0), Point::new(f64::MAX, 600.0)),
            ..SimConfig::default()
        };
        assert!(overflowing.validate().is_err());

        let nan = SimConfig {
            spawn_bounds: Bounds::new(Point::new(f64::NAN, 0.0), Point::new(600.0, 600.0)),
            ..SimConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn zero_attempts_rejected() {
        let c = SimConfig { max_spawn_attempts: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn all_zero_weights_rejected() {
        let c = SimConfig { congestion_weights: [0, 0, 0], ..SimConfig::default() };
        assert!(c.validate().is_err());
    }
}
