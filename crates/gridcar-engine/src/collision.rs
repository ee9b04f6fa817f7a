//! Collision resolution after each synchronized tick.
//!
//! [`resolve`] performs one linear scan of the roster in registration
//! order. The first active car seen at a cell becomes that cell's
//! occupant; every later active car found at the same cell collides with
//! the occupant. Both are deactivated and two symmetric events are
//! emitted.
//!
//! The occupant entry is never replaced, even after the occupant has
//! been deactivated. With three or more cars in one cell, the third and
//! later arrivals are each reported as colliding with the first
//! occupant.

use std::fmt;

use gridcar_core::{Car, CarName, Position, TickId};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::info;

/// One side of a collision: `car` ran into `other` at `position`.
///
/// Events are always emitted in pairs with `car` and `other` swapped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    /// The tick at whose end the cars shared a cell.
    pub tick: TickId,
    /// The reporting car.
    pub car: CarName,
    /// The car it collided with.
    pub other: CarName,
    /// The shared cell.
    pub position: Position,
}

impl fmt::Display for CollisionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} collides with {} at {} at step {}",
            self.car, self.other, self.position, self.tick
        )
    }
}

/// Events produced by one resolver scan.
///
/// Most ticks produce zero or one pair; inline storage holds two pairs.
pub type CollisionBatch = SmallVec<[CollisionEvent; 4]>;

/// Scan `cars` for active cars sharing a cell and stop them.
///
/// For each collision the occupant-first event is pushed before the
/// arrival-first event.
pub fn resolve(tick: TickId, cars: &mut [Car]) -> CollisionBatch {
    let mut occupants: IndexMap<Position, usize> = IndexMap::with_capacity(cars.len());
    let mut events = CollisionBatch::new();

    for i in 0..cars.len() {
        if !cars[i].is_active() {
            continue;
        }
        let position = cars[i].position();
        match occupants.get(&position) {
            Some(&j) => {
                let occupant = cars[j].name().clone();
                let arrival = cars[i].name().clone();
                info!(
                    tick = tick.0,
                    car = %occupant,
                    other = %arrival,
                    %position,
                    "collision"
                );
                events.push(CollisionEvent {
                    tick,
                    car: occupant.clone(),
                    other: arrival.clone(),
                    position,
                });
                events.push(CollisionEvent {
                    tick,
                    car: arrival,
                    other: occupant,
                    position,
                });
                cars[i].deactivate();
                cars[j].deactivate();
            }
            None => {
                occupants.insert(position, i);
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcar_test_utils::car;

    fn names(events: &[CollisionEvent]) -> Vec<(String, String)> {
        events
            .iter()
            .map(|e| (e.car.to_string(), e.other.to_string()))
            .collect()
    }

    #[test]
    fn no_collision_when_cells_distinct() {
        let mut cars = vec![car("A", 0, 0, 'N', ""), car("B", 1, 0, 'N', "")];
        assert!(resolve(TickId(1), &mut cars).is_empty());
        assert!(cars.iter().all(Car::is_active));
    }

    #[test]
    fn pair_collision_emits_symmetric_events() {
        let mut cars = vec![car("A", 1, 1, 'N', ""), car("B", 1, 1, 'S', "")];
        let events = resolve(TickId(3), &mut cars);
        assert_eq!(
            names(&events),
            vec![("A".into(), "B".into()), ("B".into(), "A".into())]
        );
        assert!(events
            .iter()
            .all(|e| e.tick == TickId(3) && e.position == Position::new(1, 1)));
        assert!(!cars[0].is_active());
        assert!(!cars[1].is_active());
    }

    #[test]
    fn event_display_matches_log_line() {
        let mut cars = vec![car("A", 0, 1, 'N', ""), car("B", 0, 1, 'S', "")];
        let events = resolve(TickId(1), &mut cars);
        assert_eq!(events[0].to_string(), "A collides with B at (0,1) at step 1");
        assert_eq!(events[1].to_string(), "B collides with A at (0,1) at step 1");
    }

    #[test]
    fn inactive_cars_do_not_trigger_collisions() {
        let mut cars = vec![car("A", 2, 2, 'N', ""), car("B", 2, 2, 'N', "")];
        cars[0].deactivate();
        assert!(resolve(TickId(1), &mut cars).is_empty());
        assert!(cars[1].is_active());
    }

    #[test]
    fn inactive_car_does_not_claim_a_cell() {
        let mut cars = vec![
            car("A", 2, 2, 'N', ""),
            car("B", 2, 2, 'N', ""),
            car("C", 2, 2, 'N', ""),
        ];
        cars[0].deactivate();
        let events = resolve(TickId(1), &mut cars);
        assert_eq!(
            names(&events),
            vec![("B".into(), "C".into()), ("C".into(), "B".into())]
        );
    }

    #[test]
    fn third_arrival_collides_with_first_occupant() {
        let mut cars = vec![
            car("A", 0, 0, 'N', ""),
            car("B", 0, 0, 'N', ""),
            car("C", 0, 0, 'N', ""),
        ];
        let events = resolve(TickId(2), &mut cars);
        assert_eq!(
            names(&events),
            vec![
                ("A".into(), "B".into()),
                ("B".into(), "A".into()),
                ("A".into(), "C".into()),
                ("C".into(), "A".into()),
            ]
        );
        assert!(cars.iter().all(|c| !c.is_active()));
    }

    #[test]
    fn separate_cells_resolve_independently() {
        let mut cars = vec![
            car("A", 0, 0, 'N', ""),
            car("B", 3, 3, 'N', ""),
            car("C", 0, 0, 'N', ""),
            car("D", 3, 3, 'N', ""),
            car("E", 4, 4, 'N', ""),
        ];
        let events = resolve(TickId(1), &mut cars);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].position, Position::new(0, 0));
        assert_eq!(events[2].position, Position::new(3, 3));
        assert!(cars[4].is_active());
    }
}
