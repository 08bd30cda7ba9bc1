//! Headless surface used for server-side report generation.
//!
//! The schematic is emitted as vector SVG. Charts are plotted with
//! `plotters` and rasterized to PNG, since the report renderer embeds chart
//! snapshots as raster images.

mod chart;
mod error;
mod schematic;

pub use error::ChartRenderError;

use std::{fmt, sync::Arc};

use resvg::usvg::fontdb;

/// Draws schematics as SVG and charts as PNG, without a display.
#[derive(Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    fonts: Arc<fontdb::Database>,
}

impl HeadlessSurface {
    /// Creates a surface drawing `width × height` pixel images.
    ///
    /// System fonts are loaded once here and reused for every chart.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        Self {
            width,
            height,
            fonts: Arc::new(fonts),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

impl fmt::Debug for HeadlessSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fonts", &self.fonts.len())
            .finish()
    }
}
