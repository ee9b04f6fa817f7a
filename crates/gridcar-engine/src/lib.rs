//! Tick driver and collision resolution for the gridcar simulator.
//!
//! Provides [`Simulation`], which owns a [`Field`](gridcar_core::Field)
//! and a roster of [`Car`](gridcar_core::Car)s and runs them in lockstep
//! ticks, and the [`collision`] resolver applied after every tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collision;
pub mod error;
pub mod metrics;
pub mod report;
pub mod simulation;

pub use collision::{resolve, CollisionBatch, CollisionEvent};
pub use error::SimulationError;
pub use metrics::RunMetrics;
pub use report::{CarState, SimulationReport};
pub use simulation::{RunState, Simulation, TickOutcome};
