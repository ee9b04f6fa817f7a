//! Reusable car, field and simulation fixtures.
//!
//! - [`car`] / [`field`] / [`simulation`]: terse literal builders.
//! - [`random_roster`] / [`random_simulation`]: deterministic random
//!   scenarios from a seed (ChaCha8), identical across platforms.

use gridcar_core::{Car, CarName, Field, Heading, Instruction, Position, Program};
use gridcar_engine::Simulation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a car from literals. Panics on invalid input.
pub fn car(name: &str, x: i32, y: i32, heading: char, commands: &str) -> Car {
    Car::parse(name, x, y, heading, commands)
        .unwrap_or_else(|e| panic!("invalid test car {name}: {e}"))
}

/// Build a field. Panics on zero dimensions.
pub fn field(width: u32, height: u32) -> Field {
    Field::new(width, height).unwrap_or_else(|e| panic!("invalid test field: {e}"))
}

/// Build an idle simulation with `cars` registered in order.
/// Panics if any car is rejected.
pub fn simulation(width: u32, height: u32, cars: impl IntoIterator<Item = Car>) -> Simulation {
    let mut sim = Simulation::new(field(width, height));
    for car in cars {
        let name = car.name().clone();
        sim.add_car(car)
            .unwrap_or_else(|e| panic!("test car {name} rejected: {e}"));
    }
    sim
}

/// A uniformly random program of exactly `len` instructions.
pub fn random_program(rng: &mut ChaCha8Rng, len: usize) -> Program {
    const TOKENS: [Instruction; 3] = [Instruction::Left, Instruction::Right, Instruction::Forward];
    (0..len).map(|_| TOKENS[rng.random_range(0..3)]).collect()
}

/// `n` cars named `C0..C{n-1}` at random on-field positions and headings,
/// each with a random program of length `1..=max_program_len`.
///
/// Positions may repeat; same-cell starts are legal and only matter once
/// a tick has run.
pub fn random_roster(field: &Field, n: usize, max_program_len: usize, seed: u64) -> Vec<Car> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let name = CarName::new(format!("C{i}")).expect("generated names are alphanumeric");
            let position = Position::new(
                rng.random_range(0..field.width() as i32),
                rng.random_range(0..field.height() as i32),
            );
            let heading = Heading::ALL[rng.random_range(0..4)];
            let len = rng.random_range(1..=max_program_len.max(1));
            let program = random_program(&mut rng, len);
            Car::new(name, position, heading, program)
        })
        .collect()
}

/// An idle simulation populated by [`random_roster`].
pub fn random_simulation(
    width: u32,
    height: u32,
    n: usize,
    max_program_len: usize,
    seed: u64,
) -> Simulation {
    let f = field(width, height);
    let cars = random_roster(&f, n, max_program_len, seed);
    simulation(width, height, cars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_roster_is_reproducible() {
        let f = field(10, 10);
        assert_eq!(random_roster(&f, 8, 20, 42), random_roster(&f, 8, 20, 42));
        assert_ne!(random_roster(&f, 8, 20, 42), random_roster(&f, 8, 20, 43));
    }

    #[test]
    fn random_roster_stays_on_field() {
        let f = field(3, 7);
        let cars = random_roster(&f, 50, 5, 7);
        assert_eq!(cars.len(), 50);
        for c in &cars {
            assert!(f.contains(c.position()));
            assert!((1..=5).contains(&c.program().len()));
        }
    }

    #[test]
    fn random_simulation_registers_everyone() {
        let sim = random_simulation(6, 6, 12, 10, 1);
        assert_eq!(sim.cars().len(), 12);
    }
}
