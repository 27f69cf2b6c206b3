//! Pedestrian movement.

use cab_core::Point;
use cab_fleet::{Passenger, PassengerStatus};

/// Something a passenger reached during [`walk_passenger`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassengerEvent {
    /// Standing at the pickup point; `ready` is now set.
    ReachedPickup,
    /// At the final destination.  The caller marks the passenger finished.
    ReachedDestination,
}

/// Move `position` up to `step` units straight towards `target`.  Returns
/// `true` (and snaps onto `target`) when less than one step remained.
pub fn walk_toward(position: &mut Point, target: Point, step: f64) -> bool {
    let delta = position.distance(target);
    if delta < step || delta == 0.0 {
        *position = target;
        return true;
    }
    let frac = step / delta;
    position.x += (target.x - position.x) * frac;
    position.y += (target.y - position.y) * frac;
    false
}

/// Advance one passenger by `step` walking distance.
///
/// Only two states walk: an assigned passenger who has not yet reached the
/// pickup point, and a dropped-off passenger heading for the destination.
pub fn walk_passenger(passenger: &mut Passenger, step: f64) -> Option<PassengerEvent> {
    match passenger.status {
        PassengerStatus::Preride if !passenger.ready => {
            let target = passenger.origin.near;
            if walk_toward(&mut passenger.position, target, step) {
                passenger.mark_ready();
                return Some(PassengerEvent::ReachedPickup);
            }
            None
        }
        PassengerStatus::Postride => {
            let target = passenger.destination.coord;
            walk_toward(&mut passenger.position, target, step).then_some(PassengerEvent::ReachedDestination)
        }
        _ => None,
    }
}
