//! Straight-line interpolation / extrapolation through two points.

use num_traits::Float;

/// Evaluate the line through `(x0, y0)` and `(x1, y1)` at `loc`.
///
/// Reproduces `y0` at `x0` and `y1` at `x1` exactly.
#[inline]
pub fn linear<T: Float>(loc: T, x0: T, x1: T, y0: T, y1: T) -> T {
    // The slope form does not round-trip exactly at the right knot
    if loc == x1 {
        return y1;
    }
    let slope = (y1 - y0) / (x1 - x0);
    y0 + slope * (loc - x0)
}

#[cfg(test)]
mod test {
    use super::linear;

    #[test]
    fn test_linear_1d() {
        assert_eq!(linear(1.5, 1.0, 2.0, 3.0, 4.0), 3.5);
        assert_eq!(linear(1.0, 1.0, 2.0, 3.0, 4.0), 3.0);
        assert_eq!(linear(2.0, 1.0, 2.0, 3.0, 4.0), 4.0);

        // Extrapolation continues the same line
        assert_eq!(linear(0.0, 1.0, 2.0, 3.0, 4.0), 2.0);
        assert_eq!(linear(4.0, 1.0, 2.0, 3.0, 4.0), 6.0);
    }

    /// Hat function crossing zero, checking sign handling on a falling segment
    #[test]
    fn test_falling_segment() {
        assert_eq!(linear(2.5, 2.0, 3.0, 1.0, -1.0), 0.0);
        assert_eq!(linear(3.5, 2.0, 3.0, 1.0, -1.0), -2.0);
    }
}
