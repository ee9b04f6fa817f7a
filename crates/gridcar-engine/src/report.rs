//! Post-run report: terminal car states and the collision log.

use std::fmt;

use gridcar_core::{Car, CarName, Heading, Position, TickId};

use crate::collision::CollisionEvent;
use crate::metrics::RunMetrics;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

/// Length-prefixed so that `("AB", "C")` and `("A", "BC")` differ.
#[inline]
fn fnv1a_str(hash: u64, s: &str) -> u64 {
    let hash = fnv1a_u64(hash, s.len() as u64);
    fnv1a_bytes(hash, s.as_bytes())
}

/// A car's state at the end of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarState {
    /// Car name.
    pub name: CarName,
    /// Final position.
    pub position: Position,
    /// Final heading.
    pub heading: Heading,
    /// `false` if the car was stopped by a collision.
    pub active: bool,
    /// Instructions consumed.
    pub cursor: usize,
}

impl From<&Car> for CarState {
    fn from(car: &Car) -> Self {
        Self {
            name: car.name().clone(),
            position: car.position(),
            heading: car.heading(),
            active: car.is_active(),
            cursor: car.cursor(),
        }
    }
}

/// Everything a front end needs to render the outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    /// Last executed tick (`TickId(0)` if none ran).
    pub ticks: TickId,
    /// Terminal state of each car, in registration order.
    pub cars: Vec<CarState>,
    /// Collision log, in detection order.
    pub collisions: Vec<CollisionEvent>,
    /// Run counters.
    pub metrics: RunMetrics,
}

impl SimulationReport {
    /// FNV-1a hash over tick count, car states and the collision log.
    ///
    /// Two runs with identical inputs produce identical digests. Timing
    /// metrics are not included.
    pub fn digest(&self) -> u64 {
        let mut hash = fnv1a_u64(FNV_OFFSET, self.ticks.0);

        hash = fnv1a_u64(hash, self.cars.len() as u64);
        for car in &self.cars {
            hash = fnv1a_str(hash, car.name.as_str());
            hash = fnv1a_i32(hash, car.position.x);
            hash = fnv1a_i32(hash, car.position.y);
            hash = fnv1a_bytes(hash, &[car.heading as u8, car.active as u8]);
            hash = fnv1a_u64(hash, car.cursor as u64);
        }

        hash = fnv1a_u64(hash, self.collisions.len() as u64);
        for event in &self.collisions {
            hash = fnv1a_u64(hash, event.tick.0);
            hash = fnv1a_str(hash, event.car.as_str());
            hash = fnv1a_str(hash, event.other.as_str());
            hash = fnv1a_i32(hash, event.position.x);
            hash = fnv1a_i32(hash, event.position.y);
        }

        hash
    }

    /// Terminal state of the car named `name`.
    pub fn car(&self, name: &str) -> Option<&CarState> {
        self.cars.iter().find(|c| c.name.as_str() == name)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for car in &self.cars {
            if car.active {
                writeln!(f, "- {}, {} {}", car.name, car.position, car.heading)?;
            } else {
                writeln!(f, "- {} is no longer active due to collision.", car.name)?;
            }
        }
        for event in &self.collisions {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, x: i32, y: i32, active: bool) -> CarState {
        CarState {
            name: CarName::new(name).unwrap(),
            position: Position::new(x, y),
            heading: Heading::North,
            active,
            cursor: 0,
        }
    }

    fn report(cars: Vec<CarState>) -> SimulationReport {
        SimulationReport {
            ticks: TickId(1),
            cars,
            collisions: Vec::new(),
            metrics: RunMetrics::default(),
        }
    }

    #[test]
    fn display_lists_active_and_stopped_cars() {
        let r = report(vec![state("A", 0, 2, true), state("B", 1, 1, false)]);
        assert_eq!(
            r.to_string(),
            "- A, (0,2) N\n- B is no longer active due to collision.\n"
        );
    }

    #[test]
    fn digest_ignores_timing() {
        let a = report(vec![state("A", 0, 2, true)]);
        let mut b = a.clone();
        b.metrics.total_us = 12345;
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn digest_sees_state_changes() {
        let a = report(vec![state("A", 0, 2, true)]);
        let b = report(vec![state("A", 0, 2, false)]);
        let c = report(vec![state("A", 2, 0, true)]);
        assert_ne!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
    }

    #[test]
    fn digest_separates_name_boundaries() {
        let mut a = report(vec![state("AB", 0, 0, true), state("C", 0, 0, true)]);
        let mut b = report(vec![state("A", 0, 0, true), state("BC", 0, 0, true)]);
        a.ticks = TickId(0);
        b.ticks = TickId(0);
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn car_lookup_by_name() {
        let r = report(vec![state("A", 0, 2, true), state("B", 1, 1, false)]);
        assert_eq!(r.car("B").map(|c| c.active), Some(false));
        assert!(r.car("Z").is_none());
    }
}
