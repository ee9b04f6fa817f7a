//! Compass headings and quarter-turn rotation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// One of the four compass headings.
///
/// The cyclic order `N → E → S → W → N` defines turns: a right turn
/// advances one step in this order, a left turn goes back one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Facing `y + 1`.
    North = 0,
    /// Facing `x + 1`.
    East = 1,
    /// Facing `y - 1`.
    South = 2,
    /// Facing `x - 1`.
    West = 3,
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The heading after a quarter-turn clockwise.
    pub fn right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// The heading after a quarter-turn counter-clockwise.
    pub fn left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    /// Returns the `(dx, dy)` unit step for this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Single-letter form: `N`, `E`, `S` or `W`.
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(ValidationError::InvalidHeading {
                input: other.to_string(),
            }),
        }
    }
}

impl FromStr for Heading {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(ValidationError::InvalidHeading {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
