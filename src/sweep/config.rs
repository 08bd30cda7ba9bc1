use crate::support::constraint::{ConstraintResult, StrictlyPositive};

/// Sweep configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    step: f64,
    max_points: usize,
}

impl SweepConfig {
    /// Constructs a validated configuration.
    ///
    /// `step` is the temperature increment in °F; `max_points` bounds the
    /// length of one sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not strictly positive.
    pub fn new(step: f64, max_points: usize) -> ConstraintResult<Self> {
        Ok(Self {
            step: StrictlyPositive::new(step)?.into_inner(),
            max_points: StrictlyPositive::new(max_points)?.into_inner(),
        })
    }

    /// Temperature increment, °F.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn max_points(&self) -> usize {
        self.max_points
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step: 10.0,
            max_points: 10_000,
        }
    }
}
