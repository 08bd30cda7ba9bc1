use thiserror::Error;

/// Errors that can occur while sweeping a temperature range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A bound is not finite, or a swept temperature is at or below -460 °F.
    #[error("cannot sweep through {temperature_f} °F")]
    InvalidRange { temperature_f: f64 },

    /// The range holds more points than the configured limit.
    #[error("sweep would produce {requested} points, limit is {max}")]
    TooManyPoints { requested: f64, max: usize },
}
