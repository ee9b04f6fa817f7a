//! Gridcar: a discrete-step multi-car grid simulation with simultaneous
//! collision detection.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridcar sub-crates. For most users, adding `gridcar` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridcar::prelude::*;
//!
//! let mut sim = Simulation::new(Field::new(10, 10).unwrap());
//! sim.add_car(Car::parse("A", 1, 2, 'N', "FFRFFFFRRL").unwrap()).unwrap();
//! sim.add_car(Car::parse("B", 7, 8, 'W', "FFLFFFFFFF").unwrap()).unwrap();
//!
//! let report = sim.run();
//! assert_eq!(report.collisions.len(), 2);
//! assert_eq!(
//!     report.collisions[0].to_string(),
//!     "A collides with B at (5,4) at step 7",
//! );
//! assert_eq!(sim.state(), RunState::Completed);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridcar-core` | Field, positions, headings, instructions, cars, validation |
//! | [`engine`] | `gridcar-engine` | Tick driver, collision resolver, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and validation (`gridcar-core`).
///
/// Contains [`types::Field`], [`types::Car`] and its
/// [`types::StepOutcome`], plus the collaborator-side
/// [`types::validate_car_name`] / [`types::validate_position`] helpers.
pub use gridcar_core as types;

/// Tick driver and collision resolution (`gridcar-engine`).
///
/// [`engine::Simulation`] runs a roster to completion and produces an
/// [`engine::SimulationReport`].
pub use gridcar_engine as engine;

/// Common imports for typical gridcar usage.
///
/// ```rust
/// use gridcar::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridcar_core::{
        parse_program, validate_car_name, validate_position, Car, CarName, Field, Heading,
        Instruction, Position, Program, StepOutcome, TickId,
    };

    // Errors
    pub use gridcar_core::ValidationError;
    pub use gridcar_engine::SimulationError;

    // Engine
    pub use gridcar_engine::{
        CollisionEvent, RunMetrics, RunState, Simulation, SimulationReport, TickOutcome,
    };
}
