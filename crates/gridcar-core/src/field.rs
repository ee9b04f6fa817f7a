//! The bounded 2D field and grid positions.

use std::fmt;

use crate::error::ValidationError;
use crate::heading::Heading;

/// A cell coordinate on the field.
///
/// `x` grows eastward and `y` grows northward; `(0, 0)` is the
/// south-west corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, `0 <= x < width` when on the field.
    pub x: i32,
    /// Row, `0 <= y < height` when on the field.
    pub y: i32,
}

impl Position {
    /// Create a position from raw coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step along `heading`.
    ///
    /// Returns `None` only on `i32` overflow; whether the cell is on
    /// the field is the [`Field`]'s call.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let (dx, dy) = heading.offset();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An immutable `width x height` bounding box.
///
/// Both dimensions are positive. Cars may only occupy cells for which
/// [`within_bounds`](Field::within_bounds) holds.
///
/// # Examples
///
/// ```
/// use gridcar_core::Field;
///
/// let field = Field::new(5, 5).unwrap();
/// assert!(field.within_bounds(0, 4));
/// assert!(!field.within_bounds(5, 0));
/// assert!(!field.within_bounds(-1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    width: u32,
    height: u32,
}

impl Field {
    /// Coordinates are `i32`, so each dimension must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a field of `width x height` cells.
    ///
    /// Returns `Err(ValidationError::EmptyField)` if either dimension is 0,
    /// or `Err(ValidationError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::EmptyField { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(ValidationError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(ValidationError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// [`within_bounds`](Self::within_bounds) for a [`Position`].
    pub fn contains(&self, position: Position) -> bool {
        self.within_bounds(position.x, position.y)
    }

    /// Check that `position` is on the field.
    pub fn check(&self, position: Position) -> Result<(), ValidationError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(ValidationError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
