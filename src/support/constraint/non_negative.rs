use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Wall thickness is the typical case: a zero wall is a legitimate
/// (if idealized) tube.
///
/// # Examples
///
/// ```
/// use wavepack_viz::support::constraint::{Constrained, NonNegative};
///
/// let wall = Constrained::<_, NonNegative>::new(0.0).unwrap();
/// assert_eq!(wall.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-0.05).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::inch};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(0.1).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn wall_thickness() {
        assert!(NonNegative::new(Length::new::<inch>(0.1)).is_ok());
        assert!(NonNegative::new(Length::new::<inch>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<inch>(-0.1)).is_err());
    }
}
