//! Convenience methods for constructing grids and sampled tables in a way
//! that echoes, but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

use crate::{ArityError, Table, TableError};

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// `n == 0` gives an empty grid and `n == 1` gives `[start]`.
///
/// # Panics
/// * If `n` is not representable in `T`
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return (0..n).map(|_| start).collect();
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn)
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Sample `f` at every point of the Cartesian product of `grids`,
/// outermost dimension first, into a nested table with one level per grid.
///
/// Every level uses the default configuration.
///
/// # Errors
/// * If `grids` is empty
/// * If any grid is not valid for [`Table::new`]
pub fn tabulate<T, F>(grids: &[&[T]], f: F) -> Result<Table<T>, TableError>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    let mut point = Vec::with_capacity(grids.len());
    tabulate_level(grids, &mut point, &f)
}

fn tabulate_level<T: Float>(
    grids: &[&[T]],
    point: &mut Vec<T>,
    f: &dyn Fn(&[T]) -> T,
) -> Result<Table<T>, TableError> {
    let (&grid, rest) = grids.split_first().ok_or(ArityError::NoCoordinates)?;

    if rest.is_empty() {
        let mut vals = Vec::with_capacity(grid.len());
        for &x in grid {
            point.push(x);
            vals.push(f(point.as_slice()));
            point.pop();
        }
        return Table::new(grid, vals);
    }

    let mut tables = Vec::with_capacity(grid.len());
    for &x in grid {
        point.push(x);
        let table = tabulate_level(rest, point, f);
        point.pop();
        tables.push(table?);
    }
    Table::nested(grid, tables)
}
