use std::{ops::Range, sync::Arc};

use plotters::{coord::Shift, prelude::*};
use resvg::{tiny_skia, usvg};

use crate::{
    artifact::{Artifact, ImageFormat},
    chart::{Chart, ChartSeries},
    surface::ChartSurface,
};

use super::{ChartRenderError, HeadlessSurface};

const FONT: &str = "sans-serif";
const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(37, 99, 235),
    RGBColor(220, 38, 38),
    RGBColor(5, 150, 105),
];

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

impl ChartSurface for HeadlessSurface {
    type Error = ChartRenderError;

    fn draw_chart(&mut self, chart: &Chart) -> Result<Artifact, Self::Error> {
        let svg = self.plot(chart)?;
        let png = self.rasterize(&svg)?;
        Ok(Artifact::new(ImageFormat::Png, png))
    }
}

impl HeadlessSurface {
    /// Plots `chart` as SVG markup.
    fn plot(&self, chart: &Chart) -> Result<String, ChartRenderError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)?;
            if chart.series.iter().any(|s| s.axes.x.is_logarithmic()) {
                plot_logarithmic(&root, chart)?;
            } else {
                plot_linear(&root, chart)?;
            }
            root.present()?;
        }
        Ok(svg)
    }

    fn rasterize(&self, svg: &str) -> Result<Vec<u8>, ChartRenderError> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fonts),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)?;

        let mut pixmap = tiny_skia::Pixmap::new(self.width, self.height).ok_or(
            ChartRenderError::Pixmap {
                width: self.width,
                height: self.height,
            },
        )?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.write_header()?.write_image_data(pixmap.data())?;
        Ok(out)
    }
}

/// Linear x axis, with secondary-axis series on the right.
fn plot_linear(root: &Area<'_>, chart: &Chart) -> Result<(), ChartRenderError> {
    let x = span(x_values(chart));
    let primary = span(y_values(chart, false));
    let secondary = span(y_values(chart, true));

    let mut context = ChartBuilder::on(root)
        .caption(chart.title, (FONT, 18.0))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .right_y_label_area_size(56)
        .build_cartesian_2d(x.clone(), primary)?
        .set_secondary_coord(x, secondary);

    context
        .configure_mesh()
        .x_desc(x_title(chart))
        .y_desc(y_title(chart, false))
        .label_style((FONT, 12.0))
        .draw()?;
    if chart.series.iter().any(|s| s.axes.y.is_secondary()) {
        context
            .configure_secondary_axes()
            .y_desc(y_title(chart, true))
            .draw()?;
    }

    for (index, series) in chart.series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let line = LineSeries::new(finite_points(series), color.stroke_width(2));
        let annotation = if series.axes.y.is_secondary() {
            context.draw_secondary_series(line)?
        } else {
            context.draw_series(line)?
        };
        annotation
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2)));
    }

    context
        .configure_series_labels()
        .label_font((FONT, 12.0))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Logarithmic x axis. Points with a non-positive x are not drawn.
fn plot_logarithmic(root: &Area<'_>, chart: &Chart) -> Result<(), ChartRenderError> {
    let x = log_span(x_values(chart));
    let y = span(y_values(chart, false).chain(y_values(chart, true)));

    let mut context = ChartBuilder::on(root)
        .caption(chart.title, (FONT, 18.0))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x.log_scale(), y)?;

    context
        .configure_mesh()
        .x_desc(x_title(chart))
        .y_desc(y_title(chart, false))
        .label_style((FONT, 12.0))
        .draw()?;

    for (index, series) in chart.series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let points = finite_points(series).filter(|&(x, _)| x > 0.0);
        context
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2)));
    }

    context
        .configure_series_labels()
        .label_font((FONT, 12.0))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn finite_points(series: &ChartSeries) -> impl Iterator<Item = (f64, f64)> + '_ {
    series
        .points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite())
}

fn x_values(chart: &Chart) -> impl Iterator<Item = f64> + '_ {
    chart
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(x, _)| x))
}

fn y_values(chart: &Chart, secondary: bool) -> impl Iterator<Item = f64> + '_ {
    chart
        .series
        .iter()
        .filter(move |s| s.axes.y.is_secondary() == secondary)
        .flat_map(|s| s.points.iter().map(|&(_, y)| y))
}

fn x_title(chart: &Chart) -> &'static str {
    chart.series.first().map_or("", |s| s.axes.x.title())
}

fn y_title(chart: &Chart, secondary: bool) -> &'static str {
    chart
        .series
        .iter()
        .find(|s| s.axes.y.is_secondary() == secondary)
        .map_or("", |s| s.axes.y.title())
}

/// Padded range covering the finite values, or `0..1` if there are none.
fn span(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        0.0..1.0
    } else if min == max {
        (min - 1.0)..(max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad)..(max + pad)
    }
}

/// Range covering the positive finite values, widened to at least a decade.
fn log_span(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        1.0..10.0
    } else if max / min < 10.0 {
        (min / 10.0)..(max * 10.0)
    } else {
        min..max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        chart::{Axes, XAxis, YAxis, attenuation_chart, temperature_chart},
        sweep::{Reference, SweepConfig, TemperatureRange, sweep},
        test_support::result,
    };

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn temperature() -> Chart {
        let result = result();
        let points = sweep(
            TemperatureRange::new(0.0, 100.0),
            Reference::from(&result),
            &SweepConfig::default(),
        )
        .unwrap();
        temperature_chart(&points)
    }

    fn png_size(artifact: &Artifact) -> (u32, u32) {
        let reader = png::Decoder::new(artifact.bytes()).read_info().unwrap();
        (reader.info().width, reader.info().height)
    }

    #[test]
    fn charts_are_png_snapshots() {
        let mut surface = HeadlessSurface::default();

        for chart in [temperature(), attenuation_chart(&result()).unwrap()] {
            let artifact = surface.draw_chart(&chart).unwrap();

            assert_eq!(artifact.format(), ImageFormat::Png, "{}", chart.title);
            assert!(artifact.bytes().starts_with(PNG_SIGNATURE));
            assert_eq!(png_size(&artifact), (600, 400));
            assert!(artifact.to_data_uri().starts_with("data:image/png;base64,"));
        }
    }

    #[test]
    fn surface_size_sets_image_size() {
        let artifact = HeadlessSurface::new(320, 240)
            .draw_chart(&temperature())
            .unwrap();
        assert_eq!(png_size(&artifact), (320, 240));
    }

    #[test]
    fn plot_carries_titles_and_legend() {
        let surface = HeadlessSurface::default();

        let svg = surface.plot(&temperature()).unwrap();
        assert!(svg.contains("Pressure and Velocity vs. Temperature"));
        assert!(svg.contains("Temperature (°F)"));
        assert!(svg.contains("Velocity (ft/s)"));
        assert!(svg.contains("ΔP (psi)"));

        let svg = surface.plot(&attenuation_chart(&result()).unwrap()).unwrap();
        assert!(svg.contains("Attenuation vs. Frequency"));
        assert!(svg.contains("Frequency (MHz)"));
        assert!(svg.contains("Shielding Effectiveness"));
    }

    #[test]
    fn degenerate_charts_still_draw() {
        let mut surface = HeadlessSurface::default();

        let empty = temperature_chart(&[]);
        assert!(surface.draw_chart(&empty).is_ok());

        let unplottable = Chart {
            title: "Unplottable",
            series: vec![ChartSeries {
                label: "SE".into(),
                points: vec![(0.0, 1.0), (-5.0, 2.0), (f64::NAN, 3.0)],
                axes: Axes::new(XAxis::Frequency, YAxis::Shielding),
            }],
        };
        assert!(surface.draw_chart(&unplottable).is_ok());
    }

    #[test]
    fn ranges_handle_degenerate_input() {
        assert_eq!(span(std::iter::empty()), 0.0..1.0);
        assert_eq!(span([5.0, 5.0].into_iter()), 4.0..6.0);
        assert_eq!(span([0.0, f64::NAN, 100.0].into_iter()), -5.0..105.0);

        assert_eq!(log_span([0.0, -1.0].into_iter()), 1.0..10.0);
        assert_eq!(log_span([2.0, 5.0].into_iter()), 0.2..50.0);
        assert_eq!(log_span([0.1, 10_000.0].into_iter()), 0.1..10_000.0);
    }
}
