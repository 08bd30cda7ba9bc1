//! Type-level numeric constraints checked at construction time.
//!
//! Values handed to the wavepack engines come from a form the user filled in,
//! so dimensions, limits, and configuration scalars are wrapped in
//! [`Constrained<T, C>`] before they are trusted.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (e.g., wall thickness)
//! - [`StrictlyPositive`]: Greater than zero (e.g., tube width, render scale)
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use wavepack_viz::support::constraint::{Constrained, StrictlyPositive};
///
/// let scale = Constrained::<_, StrictlyPositive>::new(12.0).unwrap();
/// assert_eq!(scale.into_inner(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Checks that an `f64` is finite.
///
/// Temperatures may be negative, so they only need this weaker check.
///
/// # Errors
///
/// Returns [`ConstraintError::NotANumber`] for `NaN` and
/// [`ConstraintError::NotFinite`] for infinities.
pub fn finite(value: f64) -> ConstraintResult<f64> {
    if value.is_nan() {
        Err(ConstraintError::NotANumber)
    } else if value.is_infinite() {
        Err(ConstraintError::NotFinite)
    } else {
        Ok(value)
    }
}

/// Checks that an `f64` is finite and strictly positive.
///
/// # Errors
///
/// Returns the first [`ConstraintError`] raised by [`finite`] or [`StrictlyPositive`].
pub fn finite_positive(value: f64) -> ConstraintResult<f64> {
    Ok(StrictlyPositive::new(finite(value)?)?.into_inner())
}

/// Checks that an `f64` is finite and non-negative.
///
/// # Errors
///
/// Returns the first [`ConstraintError`] raised by [`finite`] or [`NonNegative`].
pub fn finite_non_negative(value: f64) -> ConstraintResult<f64> {
    Ok(NonNegative::new(finite(value)?)?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_rejects_nan_and_infinities() {
        assert_eq!(finite(-40.0), Ok(-40.0));
        assert_eq!(finite(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(finite(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(finite(f64::NEG_INFINITY), Err(ConstraintError::NotFinite));
    }

    #[test]
    fn positive_rejects_infinity() {
        assert_eq!(finite_positive(2.0), Ok(2.0));
        assert_eq!(finite_positive(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(finite_positive(0.0), Err(ConstraintError::Zero));
        assert_eq!(finite_non_negative(0.0), Ok(0.0));
        assert_eq!(finite_non_negative(-1.0), Err(ConstraintError::Negative));
    }

    #[test]
    fn as_ref_exposes_inner_value() {
        let wall = NonNegative::new(0.1).unwrap();
        assert_eq!(wall.as_ref(), &0.1);
    }
}
