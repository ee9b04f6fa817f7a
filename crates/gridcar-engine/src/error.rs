//! Error types for the simulation driver.

use std::error::Error;
use std::fmt;

use gridcar_core::ValidationError;

/// Errors from [`Simulation::add_car`](crate::Simulation::add_car).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulationError {
    /// The car was rejected: off the field or a duplicate name.
    Validation(ValidationError),
    /// The roster is frozen because a run has started or finished.
    /// Call [`reset()`](crate::Simulation::reset) to start over.
    RosterFrozen,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::RosterFrozen => write!(f, "roster is frozen once a run has started"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::RosterFrozen => None,
        }
    }
}

impl From<ValidationError> for SimulationError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
