use crate::analysis::AnalysisResult;

use super::{Point, Primitive, Size, StyleKey};

/// Tube cross-section dimensions, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    /// Bore width, or bore diameter for circular tubes.
    pub width: f64,
    pub height: f64,
    pub wall: f64,
}

impl CrossSection {
    /// Cell pitch: the bore plus a wall on each side.
    #[must_use]
    pub fn pitch(&self) -> Size {
        Size::new(self.width + 2.0 * self.wall, self.height + 2.0 * self.wall)
    }
}

impl From<&AnalysisResult> for CrossSection {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            width: result.width_in,
            height: result.height_in,
            wall: result.wall_in,
        }
    }
}

/// Tube outline used when drawing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubeShape {
    Circular,
    Rectangular,
}

impl TubeShape {
    /// Selects the outline from a shape descriptor such as `"Circular Staggered"`.
    ///
    /// Any descriptor mentioning `Circular` draws circles; everything else
    /// draws rectangles.
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Self {
        if descriptor.contains("Circular") {
            Self::Circular
        } else {
            Self::Rectangular
        }
    }

    /// Builds the primitive for one cell whose outer footprint starts at `origin`.
    #[must_use]
    pub fn primitive(self, origin: Point, section: CrossSection, scale: f64) -> Primitive {
        match self {
            Self::Rectangular => {
                let outer = section.pitch();
                let inset = section.wall * scale;
                Primitive::RectPair {
                    outer_origin: origin,
                    outer_size: Size::new(outer.width * scale, outer.height * scale),
                    inner_origin: origin.offset(inset, inset),
                    inner_size: Size::new(section.width * scale, section.height * scale),
                    outer_style: StyleKey::WallGradient,
                    inner_style: StyleKey::Bore,
                }
            }
            Self::Circular => {
                // The wall is absorbed into the stroke rather than drawn as a
                // ring, unlike the rectangular bore/wall pair.
                // TODO: draw a wall ring once it's settled whether circular
                // walls should be visible at schematic scale.
                let radius = section.width * scale / 2.0;
                Primitive::Circle {
                    center: origin.offset(radius, radius),
                    radius,
                    style: StyleKey::WallGradient,
                }
            }
        }
    }
}
