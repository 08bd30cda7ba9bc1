use std::io;

use plotters::drawing::DrawingAreaErrorKind;
use resvg::usvg;
use thiserror::Error;

/// Errors raised while plotting or rasterizing a chart.
#[derive(Debug, Error)]
pub enum ChartRenderError {
    #[error("failed to plot chart")]
    Plot(#[from] DrawingAreaErrorKind<io::Error>),

    #[error("plotted chart is not valid SVG")]
    Parse(#[from] usvg::Error),

    #[error("cannot allocate a {width} x {height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode chart as PNG")]
    Encode(#[from] png::EncodingError),
}
