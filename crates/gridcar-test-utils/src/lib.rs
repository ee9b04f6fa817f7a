//! Test utilities and fixtures for gridcar development.
//!
//! Short constructors that panic on bad input (they are for tests) plus
//! seeded random rosters for property tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{car, field, random_program, random_roster, random_simulation, simulation};
