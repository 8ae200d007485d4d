//! One-dimensional kernels shared by every level of a table.
//!
//! A table reduces an N-dimensional query to a sequence of 1-D problems:
//! locate the bracketing cell on its own coordinate grid, gather the values
//! at the few points the style needs, and combine them with one of the
//! kernels in the submodules. Nothing here knows about nesting.

pub mod catmull;
pub mod lagrange;
pub mod linear;
pub mod spline;

use num_traits::Float;

/// Get the lower-corner index of the grid cell bracketing `loc`,
/// saturating to the first or last cell outside the grid.
///
/// The result `i` satisfies `grid[i] <= loc < grid[i + 1]` inside the grid.
/// `loc <= grid[0]` gives `0` and `loc >= grid[n - 2]` gives `n - 2`.
/// NaN also lands in the first cell.
///
/// The search starts at `hint`, walks outward in doubling steps until
/// the target cell is bracketed, then bisects. The result is identical to
/// a plain bisection search for any `hint`; only the cost differs, and it is
/// O(1) when successive queries fall in the same or a neighboring cell.
///
/// Assumes `grid` is strictly increasing with at least 2 entries.
#[inline]
pub fn bracket<T: Float>(grid: &[T], loc: T, hint: usize) -> usize {
    let n = grid.len();
    let last = n - 2; // maximum index for lower corner

    if !(loc > grid[0]) {
        return 0;
    }
    if loc >= grid[last] {
        return last;
    }

    // From here on grid[0] < loc < grid[last], so the answer is in 0..last
    // and satisfies grid[i] <= loc < grid[i + 1].
    let hint = hint.min(last - 1);
    let (mut lo, mut hi) = if grid[hint] <= loc {
        if loc < grid[hint + 1] {
            return hint;
        }
        // Hunt upward; `lo` stays at or below the target
        let mut lo = hint + 1;
        let mut step = 1;
        loop {
            let probe = lo + step;
            if probe >= last {
                break (lo, last);
            }
            if loc < grid[probe] {
                break (lo, probe);
            }
            lo = probe;
            step *= 2;
        }
    } else {
        // Hunt downward; `hi` stays strictly above the target
        let mut hi = hint;
        let mut step = 1;
        loop {
            if hi <= step {
                break (0, hi);
            }
            let probe = hi - step;
            if grid[probe] <= loc {
                break (probe, hi);
            }
            hi = probe;
            step *= 2;
        }
    };

    // Bisect with grid[lo] <= loc < grid[hi]
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if grid[mid] <= loc {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

#[cfg(test)]
mod test {
    use super::bracket;
    use crate::testing::*;
    use crate::utils::linspace;

    /// Plain bisection reference: clamp to the boundary cells.
    fn reference(grid: &[f64], loc: f64) -> usize {
        let n = grid.len();
        if loc <= grid[0] {
            return 0;
        }
        if loc >= grid[n - 2] {
            return n - 2;
        }
        grid.partition_point(|x| *x <= loc) - 1
    }

    #[test]
    fn test_boundaries() {
        let grid = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(bracket(&grid, -10.0, 2), 0);
        assert_eq!(bracket(&grid, 1.0, 2), 0);
        assert_eq!(bracket(&grid, 4.0, 0), 2);
        assert_eq!(bracket(&grid, 8.0, 0), 2);
        assert_eq!(bracket(&grid, 100.0, 1), 2);
        assert_eq!(bracket(&grid, f64::NAN, 1), 0);
    }

    #[test]
    fn test_exact_knots_select_cell_to_the_right() {
        let grid = linspace(0.0, 9.0, 10);
        for i in 0..8 {
            for hint in 0..9 {
                assert_eq!(bracket(&grid, grid[i], hint), i);
            }
        }
    }

    #[test]
    fn test_minimum_grid() {
        let grid = [0.0, 1.0];
        for hint in 0..3 {
            assert_eq!(bracket(&grid, 0.5, hint), 0);
            assert_eq!(bracket(&grid, -0.5, hint), 0);
            assert_eq!(bracket(&grid, 1.5, hint), 0);
        }
    }

    /// Whatever the starting hint, the hunt must agree with bisection
    #[test]
    fn test_matches_bisection_for_any_hint() {
        let mut rng = rng_fixed_seed();

        // Uneven grid with random spacing
        let grid = random_grid(&mut rng, 38, -3.0);
        let lo = grid[0] - 1.0;
        let hi = grid[grid.len() - 1] + 1.0;
        let locs = uniform(&mut rng, 500, lo, hi);

        for &loc in &locs {
            let expected = reference(&grid, loc);
            for hint in 0..grid.len() + 2 {
                assert_eq!(bracket(&grid, loc, hint), expected, "loc={loc} hint={hint}");
            }
        }
    }
}
