/// Horizontal axis of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XAxis {
    /// Temperature, °F.
    Temperature,
    /// Frequency, MHz, on a log scale.
    Frequency,
}

impl XAxis {
    #[must_use]
    pub fn is_logarithmic(self) -> bool {
        matches!(self, Self::Frequency)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°F)",
            Self::Frequency => "Frequency (MHz)",
        }
    }
}

/// Value axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// Velocity, ft/s.
    Velocity,
    /// Pressure drop, psi. Drawn on the secondary (right-hand) axis.
    PressureDrop,
    /// Shielding effectiveness, dB.
    Shielding,
}

impl YAxis {
    #[must_use]
    pub fn is_secondary(self) -> bool {
        matches!(self, Self::PressureDrop)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Velocity => "Velocity (ft/s)",
            Self::PressureDrop => "ΔP (psi)",
            Self::Shielding => "SE (dB)",
        }
    }
}

/// Axis pair identifying where a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axes {
    pub x: XAxis,
    pub y: YAxis,
}

impl Axes {
    #[must_use]
    pub const fn new(x: XAxis, y: YAxis) -> Self {
        Self { x, y }
    }
}

/// A labeled sequence of `(x, y)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub axes: Axes,
}

/// A titled set of series drawn on one canvas.
///
/// All series of a chart share the same [`XAxis`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub series: Vec<ChartSeries>,
}
