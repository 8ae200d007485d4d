//! Catmull-Rom spline: a cubic Hermite spline whose tangents are taken
//! from the neighboring points rather than supplied.
//!
//! At the ends of the grid the first and last points are duplicated as
//! phantom neighbors, so the boundary tangent is the slope of the boundary
//! cell itself.

use num_traits::Float;

/// Evaluate a hermite spline function on an interval from x0 to x1,
/// with imposed slopes k0 and k1 at the endpoints, and normalized
/// coordinate t = (x - x0) / (x1 - x0).
///
/// Slopes are in normalized units: dy/dt, not dy/dx.
#[inline]
pub fn normalized_hermite_spline<T: Float>(t: T, y0: T, dy: T, k0: T, k1: T) -> T {
    // `a` and `b` are the difference between this function and a linear one going
    // forward or backward with the imposed slopes.
    let a = k0 - dy;
    let b = -k1 + dy;

    let t2 = t * t;
    let t3 = t2 * t;

    let c1 = dy + a;
    let c2 = b - (a + a);
    let c3 = a - b;

    y0 + (c1 * t) + (c2 * t2) + (c3 * t3)
}

/// Index into the grid for position `k` (0..4) of the padded window around
/// cell `ileft` in a grid of `n` points. Positions before the first point or
/// after the last one repeat the boundary point.
#[inline]
pub fn padded_index(ileft: usize, k: usize, n: usize) -> usize {
    // Padded array is [p0, p0, p1, ..., p(n-1), p(n-1)], so padded
    // position ileft + k maps back to point ileft + k - 1
    (ileft + k).saturating_sub(1).min(n - 1)
}

/// Evaluate the Catmull-Rom segment between points 1 and 2 of a 4-point
/// window at `loc`. Points 0 and 3 only contribute tangents, and may repeat
/// points 1 and 2 at the grid boundary.
#[inline]
pub fn catmull_rom<T: Float>(loc: T, xs: &[T; 4], ys: &[T; 4]) -> T {
    let h = xs[2] - xs[1];
    let t = (loc - xs[1]) / h;
    if t == T::one() {
        return ys[2];
    }

    let m0 = (ys[2] - ys[0]) / (xs[2] - xs[0]);
    let m1 = (ys[3] - ys[1]) / (xs[3] - xs[1]);

    normalized_hermite_spline(t, ys[1], ys[2] - ys[1], m0 * h, m1 * h)
}
