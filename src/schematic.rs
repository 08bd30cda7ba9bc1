//! Pseudo-isometric schematic of the tube array.
//!
//! The schematic is pure data: [`render_array`] turns an
//! [`AnalysisResult`] into a list of [`Primitive`]s, and a
//! [`SchematicSurface`](crate::surface::SchematicSurface) draws them.
//!
//! Large arrays are sampled: at most `render_cap × render_cap` cells are
//! drawn (see [`RENDER_CAP`]). The returned [`Schematic`] keeps the true tube
//! counts next to the rendered ones so reports can annotate the difference.

mod config;
mod primitive;
pub mod projector;
mod shape;

pub use config::RenderConfig;
pub use primitive::{Point, Primitive, Size, StyleKey};
pub use shape::{CrossSection, TubeShape};

use tracing::debug;

use crate::analysis::AnalysisResult;

/// Default maximum number of cells drawn along each grid axis.
pub const RENDER_CAP: u32 = 50;

/// Drawing primitives for one analysis result.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    /// One primitive per rendered cell, row by row (`j` outer, `i` inner).
    pub primitives: Vec<Primitive>,

    pub shape: TubeShape,

    /// Tube counts reported by the analysis.
    pub true_dims: (u32, u32),

    /// Tube counts actually drawn.
    pub rendered_dims: (u32, u32),

    /// Whether `rendered_dims` is smaller than `true_dims` on either axis.
    pub truncated: bool,
}

/// Lays out the tube array described by `result`.
///
/// The rendered grid is centered on the configured anchor using the rendered
/// (possibly truncated) extents, so a sampled array stays centered too.
#[must_use]
pub fn render_array(result: &AnalysisResult, shape: TubeShape, config: &RenderConfig) -> Schematic {
    let true_dims = result.array_dims;
    let cap = config.render_cap();
    let rendered_dims = (true_dims.0.min(cap), true_dims.1.min(cap));
    let truncated = rendered_dims != true_dims;

    if truncated {
        debug!(
            ?true_dims,
            ?rendered_dims,
            "tube array exceeds render cap, drawing a sample"
        );
    }

    let section = CrossSection::from(result);
    let pitch = section.pitch();
    let (nx, ny) = rendered_dims;

    let mut primitives = Vec::with_capacity(nx as usize * ny as usize);
    for j in 0..ny {
        for i in 0..nx {
            let origin = projector::project((i, j), rendered_dims, pitch, config);
            primitives.push(shape.primitive(origin, section, config.scale()));
        }
    }

    Schematic {
        primitives,
        shape,
        true_dims,
        rendered_dims,
        truncated,
    }
}
