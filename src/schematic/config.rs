use crate::support::constraint::{ConstraintResult, StrictlyPositive};

use super::{Point, RENDER_CAP};

/// Layout configuration for the schematic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    anchor: Point,
    scale: f64,
    render_cap: u32,
}

impl RenderConfig {
    /// Constructs a validated configuration.
    ///
    /// `scale` is drawing units per inch; `render_cap` bounds the number of
    /// cells drawn along each axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` or `render_cap` is not strictly positive.
    pub fn new(anchor: Point, scale: f64, render_cap: u32) -> ConstraintResult<Self> {
        Ok(Self {
            anchor,
            scale: StrictlyPositive::new(scale)?.into_inner(),
            render_cap: StrictlyPositive::new(render_cap)?.into_inner(),
        })
    }

    /// Canvas point the grid is centered on.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Drawing units per inch.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn render_cap(&self) -> u32 {
        self.render_cap
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            anchor: Point::new(300.0, 200.0),
            scale: 10.0,
            render_cap: RENDER_CAP,
        }
    }
}
