//! Reading a table: bracketing, recursive sub-reads and style dispatch.

use alloc::vec::Vec;
use num_traits::Float;

use super::{Dependents, SplineCache, Table};
use crate::one_dim::{bracket, catmull, lagrange, linear, spline};
use crate::{ArityError, Style, TableError};

impl<T: Float> Table<T> {
    /// Interpolate or extrapolate the value at a point, with one coordinate
    /// per dimension of the tree, outermost first.
    ///
    /// # Errors
    /// * If no coordinates are given, or their count does not match the
    ///   depth of the branch they lead down
    /// * If a level has fewer points than its style requires
    pub fn read(&self, coords: &[T]) -> Result<T, TableError> {
        let (&loc, tail) = coords.split_first().ok_or(ArityError::NoCoordinates)?;
        self.interp_one(loc, tail)
    }

    /// Read a contiguous list of observation points, with one slice per
    /// dimension (x0, x1, ...), (y0, y1, ...) and one output per point.
    ///
    /// # Errors
    /// * If no dimensions are given
    /// * If the observation slices and the output differ in length
    /// * Any error from [`Table::read`] at an individual point
    pub fn read_many(&self, obs: &[&[T]], out: &mut [T]) -> Result<(), TableError> {
        if obs.is_empty() {
            return Err(ArityError::NoCoordinates.into());
        }

        // Make sure the size of inputs and output match
        let size_matches = obs.iter().all(|&xx| xx.len() == out.len());
        if !size_matches {
            return Err(TableError::LengthMismatch);
        }

        let mut tmp = Vec::with_capacity(obs.len());
        for i in 0..out.len() {
            tmp.clear();
            tmp.extend(obs.iter().map(|x| x[i]));
            out[i] = self.read(&tmp)?;
        }

        Ok(())
    }

    /// Read a list of observation points, allocating for the output.
    #[cfg(feature = "std")]
    pub fn read_alloc(&self, obs: &[&[T]]) -> Result<Vec<T>, TableError> {
        let n = obs.first().map_or(0, |x| x.len());
        let mut out = vec![T::zero(); n];
        self.read_many(obs, &mut out)?;
        Ok(out)
    }

    /// Evaluate this level at `loc`, reading dependents with `tail`.
    fn interp_one(&self, loc: T, tail: &[T]) -> Result<T, TableError> {
        let grid = &self.independents[..];
        let n = grid.len();

        let required = self.style.min_points();
        if n < required {
            return Err(TableError::InsufficientData {
                style: self.style,
                required,
                available: n,
            });
        }

        // Hold the boundary value outside the grid
        if !self.extrapolate {
            if loc < grid[0] {
                return self.sub_read(0, tail);
            }
            if loc > grid[n - 1] {
                return self.sub_read(n - 1, tail);
            }
        }

        let ileft = bracket(grid, loc, self.last_bracket.get());
        self.last_bracket.set(ileft);

        match self.style {
            Style::Linear => {
                let y0 = self.sub_read(ileft, tail)?;
                let y1 = self.sub_read(ileft + 1, tail)?;
                Ok(linear::linear(loc, grid[ileft], grid[ileft + 1], y0, y1))
            }
            Style::Lagrange2 => {
                let start = lagrange::quadratic_window(ileft, n);
                let (xs, ys) = self.gather::<3>(|k| start + k, tail)?;
                Ok(lagrange::lagrange(loc, &xs, &ys))
            }
            Style::Lagrange3 => {
                let start = lagrange::cubic_window(ileft, n);
                let (xs, ys) = self.gather::<4>(|k| start + k, tail)?;
                Ok(lagrange::lagrange(loc, &xs, &ys))
            }
            Style::Cubic => {
                let (d1, d2) = self.second_derivatives_at(ileft, tail)?;
                let y1 = self.sub_read(ileft, tail)?;
                let y2 = self.sub_read(ileft + 1, tail)?;
                Ok(spline::segment(
                    loc,
                    grid[ileft],
                    grid[ileft + 1],
                    y1,
                    y2,
                    d1,
                    d2,
                ))
            }
            Style::Catmull => {
                let (xs, ys) = self.gather::<4>(|k| catmull::padded_index(ileft, k, n), tail)?;
                Ok(catmull::catmull_rom(loc, &xs, &ys))
            }
        }
    }

    /// The dependent value at sample point `i`, recursing into a nested
    /// table with the remaining coordinates.
    fn sub_read(&self, i: usize, tail: &[T]) -> Result<T, TableError> {
        match &self.dependents {
            Dependents::Scalars(ys) => {
                if !tail.is_empty() {
                    return Err(ArityError::TooManyCoordinates.into());
                }
                Ok(ys[i])
            }
            Dependents::Tables(tables) => {
                let (&loc, rest) = tail
                    .split_first()
                    .ok_or(ArityError::TooFewCoordinates)?;
                tables[i].interp_one(loc, rest)
            }
        }
    }

    /// Coordinates and dependent values at `N` sample points, where the
    /// `k`th point is at grid index `index(k)`.
    #[inline]
    fn gather<const N: usize>(
        &self,
        index: impl Fn(usize) -> usize,
        tail: &[T],
    ) -> Result<([T; N], [T; N]), TableError> {
        let mut xs = [T::zero(); N];
        let mut ys = [T::zero(); N];
        for k in 0..N {
            let i = index(k);
            xs[k] = self.independents[i];
            ys[k] = self.sub_read(i, tail)?;
        }
        Ok((xs, ys))
    }

    /// Spline second derivatives at both ends of cell `ileft`, solving for
    /// the whole level if the cache is empty or was filled for another tail.
    fn second_derivatives_at(&self, ileft: usize, tail: &[T]) -> Result<(T, T), TableError> {
        if let Some(cache) = self.spline_cache.borrow().as_ref() {
            if cache.tail.as_slice() == tail {
                let d = &cache.second_derivatives;
                return Ok((d[ileft], d[ileft + 1]));
            }
        }

        // Sub-reads only touch nested tables' own caches, never this one
        let ys = (0..self.len())
            .map(|i| self.sub_read(i, tail))
            .collect::<Result<Vec<T>, TableError>>()?;
        let second_derivatives = spline::second_derivatives(&self.independents, &ys);
        log::trace!(
            "solved spline second derivatives for {} points with {} trailing coordinates",
            ys.len(),
            tail.len()
        );

        let pair = (second_derivatives[ileft], second_derivatives[ileft + 1]);
        *self.spline_cache.borrow_mut() = Some(SplineCache {
            tail: tail.to_vec(),
            second_derivatives,
        });

        Ok(pair)
    }
}
