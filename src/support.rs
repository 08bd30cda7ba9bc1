//! Supporting utilities shared across the rendering, sweep, and report code.
//!
//! - [`constraint`]: Type-level numeric constraints used to validate inputs
//!   and configuration.
//! - [`units`]: Unit-system labels and conversions for display.

pub mod constraint;
pub mod units;
