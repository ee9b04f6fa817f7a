//! The simulation driver.
//!
//! [`Simulation`] owns the field and the car roster and advances them in
//! lockstep ticks. Each tick has two strictly ordered phases:
//!
//! 1. every car, in registration order, executes at most one instruction;
//! 2. one [`resolve`](crate::collision::resolve) scan runs over the whole
//!    roster.
//!
//! Collisions are only ever judged on end-of-tick positions, so the order
//! cars were registered in cannot create asymmetric collisions.
//!
//! # Lifecycle
//!
//! `Idle → Running → Completed`. Cars can only be added while `Idle`. The
//! run length is fixed when the first tick starts: the length of the
//! longest program. [`reset()`](Simulation::reset) returns to `Idle` with an
//! empty roster and the same field.

use std::time::Instant;

use gridcar_core::{Car, Field, StepOutcome, TickId, ValidationError};
use tracing::{debug, info, warn};

use crate::collision::{resolve, CollisionBatch, CollisionEvent};
use crate::error::SimulationError;
use crate::metrics::RunMetrics;
use crate::report::{CarState, SimulationReport};

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Where a [`Simulation`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Accepting cars; no tick has run.
    Idle,
    /// At least one tick has run and more remain.
    Running,
    /// Every tick has run. Only [`Simulation::reset`] leaves this state.
    Completed,
}

/// Result of a single [`Simulation::step`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// The tick that just ran.
    pub tick: TickId,
    /// Collision events detected at the end of this tick.
    pub collisions: CollisionBatch,
    /// `true` if this was the last tick of the run.
    pub completed: bool,
}

/// Single-threaded, lockstep multi-car simulation.
///
/// # Example
///
/// ```
/// use gridcar_core::{Car, Field};
/// use gridcar_engine::Simulation;
///
/// let mut sim = Simulation::new(Field::new(3, 3).unwrap());
/// sim.add_car(Car::parse("A", 0, 0, 'N', "F").unwrap()).unwrap();
/// sim.add_car(Car::parse("B", 0, 2, 'S', "F").unwrap()).unwrap();
///
/// let report = sim.run();
/// assert_eq!(report.collisions.len(), 2);
/// assert!(report.cars.iter().all(|c| !c.active));
/// ```
#[derive(Debug)]
pub struct Simulation {
    field: Field,
    cars: Vec<Car>,
    collisions: Vec<CollisionEvent>,
    state: RunState,
    current_tick: TickId,
    max_ticks: u64,
    metrics: RunMetrics,
}

impl Simulation {
    /// Create an idle simulation on `field` with an empty roster.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            cars: Vec::new(),
            collisions: Vec::new(),
            state: RunState::Idle,
            current_tick: TickId(0),
            max_ticks: 0,
            metrics: RunMetrics::default(),
        }
    }

    /// Register a car at the end of the roster.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::RosterFrozen`] unless the simulation is `Idle`.
    /// - [`ValidationError::OutOfBounds`] if the car starts off the field.
    /// - [`ValidationError::DuplicateName`] if the name is taken.
    pub fn add_car(&mut self, car: Car) -> Result<(), SimulationError> {
        if self.state != RunState::Idle {
            warn!(car = %car.name(), state = ?self.state, "rejected car: roster frozen");
            return Err(SimulationError::RosterFrozen);
        }
        if let Err(e) = self.field.check(car.position()) {
            warn!(car = %car.name(), position = %car.position(), "rejected car: out of bounds");
            return Err(e.into());
        }
        if self.car(car.name().as_str()).is_some() {
            warn!(car = %car.name(), "rejected car: duplicate name");
            return Err(ValidationError::DuplicateName {
                name: car.name().as_str().to_string(),
            }
            .into());
        }
        debug!(car = %car, roster = self.cars.len() + 1, "car added");
        self.cars.push(car);
        Ok(())
    }

    /// Execute one tick.
    ///
    /// The first call freezes the roster and fixes the run length. Returns
    /// `None` once the run is complete, including when the run has zero
    /// ticks (empty roster, or only empty programs).
    pub fn step(&mut self) -> Option<TickOutcome> {
        match self.state {
            RunState::Completed => return None,
            RunState::Idle => {
                self.begin();
                if self.state == RunState::Completed {
                    return None;
                }
            }
            RunState::Running => {}
        }

        let started = Instant::now();
        let tick = self.current_tick.next();

        for car in &mut self.cars {
            let outcome = car.execute_one_step(&self.field);
            if outcome.consumed_instruction() {
                self.metrics.instructions_executed += 1;
            }
            if matches!(outcome, StepOutcome::Blocked(_)) {
                self.metrics.moves_blocked += 1;
            }
        }

        let collisions = resolve(tick, &mut self.cars);
        self.collisions.extend(collisions.iter().cloned());

        self.current_tick = tick;
        self.metrics.ticks_executed += 1;
        self.metrics.collision_pairs += (collisions.len() / 2) as u64;
        self.metrics.total_us += started.elapsed().as_micros() as u64;
        debug!(
            tick = tick.0,
            collisions = collisions.len() / 2,
            active = self.cars.iter().filter(|c| c.is_active()).count(),
            "tick"
        );

        let completed = tick.0 >= self.max_ticks;
        if completed {
            self.finish();
        }

        Some(TickOutcome {
            tick,
            collisions,
            completed,
        })
    }

    /// Run every remaining tick and return the final report.
    ///
    /// Calling `run()` again on a completed simulation returns the same
    /// report without executing anything.
    pub fn run(&mut self) -> SimulationReport {
        while self.step().is_some() {}
        self.report()
    }

    /// Snapshot of the current car states, collision log and metrics.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            ticks: self.current_tick,
            cars: self.cars.iter().map(CarState::from).collect(),
            collisions: self.collisions.clone(),
            metrics: self.metrics.clone(),
        }
    }

    /// Clear the roster and collision log and return to `Idle`.
    ///
    /// The field is kept.
    pub fn reset(&mut self) {
        debug!(cars = self.cars.len(), "reset");
        self.cars.clear();
        self.collisions.clear();
        self.state = RunState::Idle;
        self.current_tick = TickId(0);
        self.max_ticks = 0;
        self.metrics = RunMetrics::default();
    }

    /// The field cars move on.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The roster, in registration order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Look up a registered car by name.
    pub fn car(&self, name: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.name().as_str() == name)
    }

    /// Collision log so far, in detection order.
    pub fn collisions(&self) -> &[CollisionEvent] {
        &self.collisions
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Last executed tick (0 before the first tick and after reset).
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Length of the longest program in the roster.
    ///
    /// Fixed once the run starts; computed from the current roster while
    /// `Idle`.
    pub fn max_ticks(&self) -> u64 {
        match self.state {
            RunState::Idle => self.longest_program(),
            RunState::Running | RunState::Completed => self.max_ticks,
        }
    }

    /// Counters for the current run.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    fn longest_program(&self) -> u64 {
        self.cars
            .iter()
            .map(|c| c.program().len() as u64)
            .max()
            .unwrap_or(0)
    }

    fn begin(&mut self) {
        self.max_ticks = self.longest_program();
        self.state = RunState::Running;
        info!(
            cars = self.cars.len(),
            max_ticks = self.max_ticks,
            field = %self.field,
            "simulation started"
        );
        if self.max_ticks == 0 {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.state = RunState::Completed;
        info!(
            ticks = self.current_tick.0,
            collisions = self.metrics.collision_pairs,
            "simulation completed"
        );
    }
}
