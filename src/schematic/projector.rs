//! Grid-to-canvas projection.
//!
//! A cheap 2.5-D stagger, not a true isometric transform: the grid is
//! centered on the anchor, then each row `j` is shifted left by half a unit
//! and down by a quarter unit per row.

use super::{Point, RenderConfig, Size};

/// Horizontal skew per row, in inches.
const SKEW_X: f64 = -0.5;

/// Vertical skew per row, in inches.
const SKEW_Y: f64 = 0.25;

/// Projects grid cell `(i, j)` of an `(nx, ny)` grid to its drawing origin.
///
/// `pitch` is the cell size in inches (cross-section plus both walls).
/// The origin is the top-left corner of the cell's outer footprint.
#[must_use]
pub fn project(index: (u32, u32), extents: (u32, u32), pitch: Size, config: &RenderConfig) -> Point {
    let (i, j) = (f64::from(index.0), f64::from(index.1));
    let (nx, ny) = (f64::from(extents.0), f64::from(extents.1));
    let anchor = config.anchor();
    let scale = config.scale();

    Point::new(
        anchor.x + (i - nx / 2.0) * pitch.width * scale + j * SKEW_X * scale,
        anchor.y + (j - ny / 2.0) * pitch.height * scale + j * SKEW_Y * scale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config() -> RenderConfig {
        RenderConfig::new(Point::new(300.0, 200.0), 8.0, 50).unwrap()
    }

    const PITCH: Size = Size::new(2.2, 1.7);

    #[test]
    fn linear_in_grid_indices() {
        let config = config();
        let extents = (7, 5);
        let base = project((2, 1), extents, PITCH, &config);

        let next_i = project((3, 1), extents, PITCH, &config);
        assert_relative_eq!(next_i.x - base.x, PITCH.width * 8.0, epsilon = 1e-9);
        assert_relative_eq!(next_i.y, base.y, epsilon = 1e-9);

        let next_j = project((2, 2), extents, PITCH, &config);
        assert_relative_eq!(next_j.x - base.x, -0.5 * 8.0, epsilon = 1e-9);
        assert_relative_eq!(
            next_j.y - base.y,
            PITCH.height * 8.0 + 0.25 * 8.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn first_cell_matches_formula() {
        let origin = project((0, 0), (4, 2), PITCH, &config());
        assert_relative_eq!(origin.x, 300.0 - 2.0 * 2.2 * 8.0, epsilon = 1e-9);
        assert_relative_eq!(origin.y, 200.0 - 1.7 * 8.0, epsilon = 1e-9);
    }

    #[test]
    fn grid_is_centered_on_anchor() {
        let config = config();
        let scale = config.scale();

        for extents in [(1, 1), (4, 3), (9, 6)] {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            let mut count = 0.0;

            for j in 0..extents.1 {
                for i in 0..extents.0 {
                    let origin = project((i, j), extents, PITCH, &config);
                    let j = f64::from(j);
                    // Cell centers with the per-row skew removed.
                    sum_x += origin.x + PITCH.width * scale / 2.0 - j * SKEW_X * scale;
                    sum_y += origin.y + PITCH.height * scale / 2.0 - j * SKEW_Y * scale;
                    count += 1.0;
                }
            }

            assert_relative_eq!(sum_x / count, 300.0, epsilon = 1e-9);
            assert_relative_eq!(sum_y / count, 200.0, epsilon = 1e-9);
        }
    }
}
