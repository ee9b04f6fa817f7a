//! Strongly-typed identifiers: [`CarName`] and [`TickId`].

use std::borrow::Borrow;
use std::fmt;

use crate::error::ValidationError;

/// Monotonically increasing tick counter.
///
/// Tick 0 is the state before any instruction runs; the first executed
/// tick is `TickId(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A validated car name: non-empty and alphanumeric.
///
/// Uniqueness is a roster property, checked by
/// [`validate_car_name`](crate::validate_car_name) and at registration.
///
/// # Examples
///
/// ```
/// use gridcar_core::CarName;
///
/// assert!(CarName::new("A1").is_ok());
/// assert!(CarName::new("").is_err());
/// assert!(CarName::new("car one").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarName(String);

impl CarName {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !name.chars().all(char::is_alphanumeric) {
            return Err(ValidationError::InvalidName { name });
        }
        Ok(Self(name))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CarName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CarName {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
