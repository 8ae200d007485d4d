//! Interpolation style selection.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::TableError;

/// Interpolation / extrapolation algorithm used at one level of a table.
///
/// The style is local to a node; nested tables keep their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Straight line through the bracketing pair.
    #[default]
    Linear,
    /// Quadratic Lagrange polynomial through 3 consecutive points.
    Lagrange2,
    /// Cubic Lagrange polynomial through 4 consecutive points.
    Lagrange3,
    /// Natural cubic spline (zero second derivative at both ends).
    Cubic,
    /// Cubic Hermite spline with Catmull-Rom tangents.
    Catmull,
}

impl Style {
    /// Every style, in numeric-code order.
    pub const ALL: [Style; 5] = [
        Style::Linear,
        Style::Lagrange2,
        Style::Lagrange3,
        Style::Cubic,
        Style::Catmull,
    ];

    /// Minimum number of sample points a node needs to be read with this style.
    pub const fn min_points(self) -> usize {
        match self {
            Style::Linear => 2,
            Style::Lagrange2 => 3,
            Style::Lagrange3 => 4,
            Style::Cubic => 3,
            Style::Catmull => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Style::Linear => "linear",
            Style::Lagrange2 => "lagrange2",
            Style::Lagrange3 => "lagrange3",
            Style::Cubic => "cubic",
            Style::Catmull => "catmull",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TableError::UnknownStyle(s.to_string()))
    }
}

impl TryFrom<u8> for Style {
    type Error = TableError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Style::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| TableError::UnknownStyle(code.to_string()))
    }
}
