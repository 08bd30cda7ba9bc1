/// A point in drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width and height in drawing units (or inches, for pitches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Paint identifier resolved by the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Tube wall, shaded to suggest depth.
    WallGradient,
    /// Hollow bore of a tube.
    Bore,
}

/// One drawable element of the schematic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
        style: StyleKey,
    },

    /// An outer wall rectangle with the bore drawn on top of it.
    RectPair {
        outer_origin: Point,
        outer_size: Size,
        inner_origin: Point,
        inner_size: Size,
        outer_style: StyleKey,
        inner_style: StyleKey,
    },
}
