//! The `Dispatcher` trait: the extension point for assignment policy.

use cab_core::TaxiId;
use cab_network::{EdgePos, Heading, RoadNetwork, Router};

/// A dispatcher's pick for one passenger.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offer {
    pub taxi: TaxiId,
    /// Route answer from the taxi to the pickup point.
    pub heading: Heading,
}

/// Pluggable assignment policy.
///
/// # Example
///
/// ```rust,ignore
/// /// Always sends the lowest-numbered free taxi, however far away.
/// struct FirstFree;
///
/// impl Dispatcher for FirstFree {
///     fn choose<R: Router>(&self, network: &RoadNetwork, router: &R, pickup: EdgePos,
///                          candidates: &[(TaxiId, EdgePos)], _max_range: f64) -> Option<Offer> {
///         let &(taxi, at) = candidates.first()?;
///         Some(Offer { taxi, heading: router.direction(network, at, pickup) })
///     }
/// }
/// ```
pub trait Dispatcher {
    /// Pick one of `candidates` (free taxis and their positions, in id
    /// order) to collect a passenger at `pickup`, or `None` to leave the
    /// passenger waiting until the next step.
    fn choose<R: Router>(
        &self,
        network:    &RoadNetwork,
        router:     &R,
        pickup:     EdgePos,
        candidates: &[(TaxiId, EdgePos)],
        max_range:  f64,
    ) -> Option<Offer>;
}

/// Greedy nearest-by-route-cost policy.
///
/// The cheapest candidate wins; on equal cost the first in id order wins.
/// A passenger whose cheapest candidate costs more than `max_range` is not
/// served (a cost of exactly `max_range` is).
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestTaxi;

impl Dispatcher for NearestTaxi {
    fn choose<R: Router>(
        &self,
        network:    &RoadNetwork,
        router:     &R,
        pickup:     EdgePos,
        candidates: &[(TaxiId, EdgePos)],
        max_range:  f64,
    ) -> Option<Offer> {
        let mut best: Option<Offer> = None;
        for &(taxi, at) in candidates {
            let heading = router.direction(network, at, pickup);
            if best.is_none_or(|b| heading.cost < b.heading.cost) {
                best = Some(Offer { taxi, heading });
            }
        }
        best.filter(|b| b.heading.cost <= max_range)
    }
}
