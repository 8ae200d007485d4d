//! Lagrange polynomial interpolation through a small window of points.

use num_traits::Float;

/// Evaluate the unique polynomial of degree `N - 1` through the `N` points
/// `(xs[k], ys[k])` at `loc`, in Lagrange form:
///
/// ```text
/// p(loc) = sum_k ys[k] * prod_{j != k} (loc - xs[j]) / prod_{j != k} (xs[k] - xs[j])
/// ```
///
/// Returns `ys[k]` exactly when `loc == xs[k]`.
#[inline]
pub fn lagrange<T: Float, const N: usize>(loc: T, xs: &[T; N], ys: &[T; N]) -> T {
    if let Some(k) = xs.iter().position(|&x| x == loc) {
        return ys[k];
    }

    let mut acc = T::zero();
    for k in 0..N {
        let mut num = T::one();
        let mut den = T::one();
        for j in 0..N {
            if j != k {
                num = num * (loc - xs[j]);
                den = den * (xs[k] - xs[j]);
            }
        }
        acc = acc + ys[k] * num / den;
    }

    acc
}

/// Start of the 3-point window used for quadratic interpolation in cell `ileft`
/// of a grid with `n` points. The window is shifted left in the last cell.
#[inline]
pub fn quadratic_window(ileft: usize, n: usize) -> usize {
    if ileft >= n - 2 {
        n - 3
    } else {
        ileft
    }
}

/// Start of the 4-point window used for cubic interpolation in cell `ileft`
/// of a grid with `n` points. The window is centered on the cell and clamped
/// to the grid at both ends.
#[inline]
pub fn cubic_window(ileft: usize, n: usize) -> usize {
    let indx = if ileft > n - 3 {
        n - 3
    } else if ileft == 0 {
        1
    } else {
        ileft
    };
    indx - 1
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quadratic() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 4.0, 9.0];
        assert_eq!(lagrange(2.5, &xs, &ys), 6.25);
        assert_eq!(lagrange(0.0, &xs, &ys), 0.0);
        assert_eq!(lagrange(-1.0, &xs, &ys), 1.0);
    }

    #[test]
    fn test_cubic() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [1.0, 8.0, 27.0, 64.0];
        assert_eq!(lagrange(3.5, &xs, &ys), 42.875);
        assert!((lagrange(5.0, &xs, &ys) - 125.0).abs() < 1e-12);
    }

    /// Reproduce the sample values exactly, even with awkward spacing
    #[test]
    fn test_knots_are_exact() {
        let xs = [0.1, 0.35, 0.7, 1.3];
        let ys = [0.3, -0.7, 1.1, 2.9];
        for k in 0..4 {
            assert_eq!(lagrange(xs[k], &xs, &ys), ys[k]);
        }
    }

    #[test]
    fn test_windows() {
        // 3 points: only one quadratic window
        assert_eq!(quadratic_window(0, 3), 0);
        assert_eq!(quadratic_window(1, 3), 0);

        // 5 points: cells 0..=3
        assert_eq!(quadratic_window(0, 5), 0);
        assert_eq!(quadratic_window(2, 5), 2);
        assert_eq!(quadratic_window(3, 5), 2);

        // 4 points: only one cubic window
        for ileft in 0..3 {
            assert_eq!(cubic_window(ileft, 4), 0);
        }

        // 6 points: cells 0..=4, windows 0..=2
        assert_eq!(cubic_window(0, 6), 0);
        assert_eq!(cubic_window(1, 6), 0);
        assert_eq!(cubic_window(2, 6), 1);
        assert_eq!(cubic_window(3, 6), 2);
        assert_eq!(cubic_window(4, 6), 2);
    }
}
