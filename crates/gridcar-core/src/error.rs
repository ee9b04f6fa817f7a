//! Error types for gridcar input validation.
//!
//! Every failure the core can report happens at construction or
//! registration time. Once a run starts, all operations are total.

use std::error::Error;
use std::fmt;

use crate::field::Position;

/// Rejection of collaborator-supplied input.
///
/// Raised while building a [`Field`](crate::Field), a [`Car`](crate::Car),
/// or registering a car into a simulation. Always recoverable: the caller
/// rejects the input and asks again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The car name is the empty string.
    EmptyName,
    /// The car name contains a non-alphanumeric character.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// Another car with this name is already registered.
    DuplicateName {
        /// The rejected name.
        name: String,
    },
    /// The heading is not one of `N`, `E`, `S`, `W`.
    InvalidHeading {
        /// The rejected input, verbatim.
        input: String,
    },
    /// An instruction token is not one of `L`, `R`, `F`.
    InvalidInstruction {
        /// The offending token.
        token: char,
        /// Character index of the token within the instruction string.
        index: usize,
    },
    /// A position lies outside the field.
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Field width.
        width: u32,
        /// Field height.
        height: u32,
    },
    /// A field dimension is zero.
    EmptyField {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A field dimension does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "car name cannot be empty"),
            Self::InvalidName { name } => {
                write!(f, "car name '{name}' must only contain alphanumeric characters")
            }
            Self::DuplicateName { name } => {
                write!(f, "car name '{name}' must be unique; it already exists")
            }
            Self::InvalidHeading { input } => {
                write!(f, "invalid direction '{input}': expected one of N, E, S, W")
            }
            Self::InvalidInstruction { token, index } => {
                write!(
                    f,
                    "invalid command '{token}' at index {index}: expected only L, R, F"
                )
            }
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(
                f,
                "position {position} is outside the {width} x {height} field"
            ),
            Self::EmptyField { width, height } => {
                write!(f, "field must be at least 1 x 1, got {width} x {height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "field {name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = ValidationError::InvalidInstruction {
            token: 'X',
            index: 1,
        };
        assert_eq!(
            e.to_string(),
            "invalid command 'X' at index 1: expected only L, R, F"
        );

        let e = ValidationError::OutOfBounds {
            position: Position::new(5, 0),
            width: 5,
            height: 5,
        };
        assert_eq!(e.to_string(), "position (5,0) is outside the 5 x 5 field");
    }
}
