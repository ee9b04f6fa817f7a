//! Collaborator-side validation helpers.
//!
//! Front ends call these once per input, before anything reaches a
//! simulation, and re-prompt on `Err`.

use crate::error::ValidationError;
use crate::field::{Field, Position};
use crate::id::CarName;

/// Validate a car name against the names already in use.
///
/// Checks, in order: non-empty, alphanumeric, not in `existing`.
///
/// # Examples
///
/// ```
/// use gridcar_core::{validate_car_name, ValidationError};
///
/// assert!(validate_car_name("B", ["A"]).is_ok());
/// assert_eq!(
///     validate_car_name("A", ["A"]),
///     Err(ValidationError::DuplicateName { name: "A".into() }),
/// );
/// ```
pub fn validate_car_name<'a, I>(name: &str, existing: I) -> Result<CarName, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let name = CarName::new(name)?;
    if existing.into_iter().any(|n| n == name.as_str()) {
        return Err(ValidationError::DuplicateName {
            name: name.as_str().to_string(),
        });
    }
    Ok(name)
}

/// Validate that `(x, y)` is on `field`.
pub fn validate_position(field: &Field, x: i32, y: i32) -> Result<Position, ValidationError> {
    let position = Position::new(x, y);
    field.check(position)?;
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_checks_run_before_uniqueness() {
        assert_eq!(
            validate_car_name("", ["", "A"]),
            Err(ValidationError::EmptyName)
        );
        assert!(matches!(
            validate_car_name("a b", ["a b"]),
            Err(ValidationError::InvalidName { .. })
        ));
    }

    #[test]
    fn unique_name_is_returned() {
        let existing = vec!["Car1".to_string(), "Car2".to_string()];
        let name = validate_car_name("Car3", existing.iter().map(String::as_str)).unwrap();
        assert_eq!(name.as_str(), "Car3");
    }

    #[test]
    fn position_must_be_on_field() {
        let field = Field::new(2, 3).unwrap();
        assert_eq!(validate_position(&field, 1, 2), Ok(Position::new(1, 2)));
        assert!(matches!(
            validate_position(&field, 2, 0),
            Err(ValidationError::OutOfBounds { width: 2, height: 3, .. })
        ));
    }
}
