//! Natural cubic spline.
//!
//! The spline is stored as its second derivative at each sample point,
//! solved once from the full set of samples. Evaluating a segment then only
//! needs the two bracketing samples and their second derivatives.

use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

/// Solve for the second derivatives of the natural cubic spline through
/// `(xs[i], ys[i])`, with the second derivative fixed at zero at both ends.
///
/// Forward-eliminates the tridiagonal system for the interior points, then
/// back-substitutes. Assumes `xs` is strictly increasing and
/// `xs.len() == ys.len() >= 2`.
pub fn second_derivatives<T: Float>(xs: &[T], ys: &[T]) -> Vec<T> {
    let n = xs.len();
    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let six = two + two + two;

    let mut y2 = vec![zero; n];
    let mut u = vec![zero; n];

    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2[i - 1] + two;
        y2[i] = (sig - one) / p;

        let slope_right = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]);
        let slope_left = (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (six * (slope_right - slope_left) / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // Natural boundary: y2[n - 1] stays zero
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    y2
}

/// Evaluate one segment of a cubic spline between `(x1, y1)` and `(x2, y2)`,
/// where `d1` and `d2` are the second derivatives at those points.
///
/// Outside `[x1, x2]` the same cubic is continued.
#[inline]
pub fn segment<T: Float>(loc: T, x1: T, x2: T, y1: T, y2: T, d1: T, d2: T) -> T {
    let one = T::one();
    let two = one + one;
    let six = two + two + two;

    let h = x2 - x1;
    let a = (x2 - loc) / h;
    let b = (loc - x1) / h;

    a * y1 + b * y2 + ((a * a * a - a) * d1 + (b * b * b - b) * d2) * (h * h) / six
}
