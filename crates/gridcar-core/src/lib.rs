//! Core types for the gridcar simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! field, headings, instructions, identifiers, the [`Car`] state machine,
//! and the [`ValidationError`] raised when collaborator input is rejected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod car;
pub mod error;
pub mod field;
pub mod heading;
pub mod id;
pub mod instruction;
pub mod validate;

pub use car::{Car, StepOutcome};
pub use error::ValidationError;
pub use field::{Field, Position};
pub use heading::Heading;
pub use id::{CarName, TickId};
pub use instruction::{parse_program, program_to_string, Instruction, Program};
pub use validate::{validate_car_name, validate_position};
