//! A recursively nested lookup table.
//!
//! ```rust
//! use interptable::{Style, Table};
//!
//! // One dimension: a scalar per coordinate
//! let t = Table::new([1.0, 2.0], [3.0, 4.0]).unwrap();
//! assert_eq!(t.read(&[1.5]).unwrap(), 3.5);
//!
//! // Two dimensions: a table per coordinate, each with its own grid
//! let t = Table::nested(
//!     [1.0, 2.0],
//!     [
//!         Table::new([1.0, 2.0], [3.0, 4.0]).unwrap(),
//!         Table::new([2.0, 3.0, 5.0], [6.0, -1.0, 7.0]).unwrap(),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(t.read(&[2.0, 3.0]).unwrap(), -1.0);
//! assert_eq!(t.read(&[1.5, 2.0]).unwrap(), 5.0);
//!
//! // Configure while building
//! let t = Table::new_with([1.0, 2.0, 3.0], [1.0, 4.0, 9.0], |t| {
//!     t.set_style(Style::Lagrange2);
//! })
//! .unwrap();
//! assert_eq!(t.read(&[2.5]).unwrap(), 6.25);
//! ```

mod format;
mod lookup;

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::cmp::Ordering;
use num_traits::Float;

use crate::{ConstructionError, Style, TableError};

/// The dependent values of one table level.
///
/// A level holds either scalars (it is the last dimension) or nested
/// tables (one dimension lower each), never a mix.
#[derive(Debug, Clone)]
pub enum Dependents<T: Float> {
    Scalars(Vec<T>),
    Tables(Vec<Table<T>>),
}

impl<T: Float> Dependents<T> {
    pub fn len(&self) -> usize {
        match self {
            Dependents::Scalars(v) => v.len(),
            Dependents::Tables(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The dependent value at a single sample point.
#[derive(Debug, Clone, Copy)]
pub enum Dependent<'a, T: Float> {
    Scalar(T),
    Nested(&'a Table<T>),
}

/// Natural spline second derivatives, along with the coordinate tail
/// that produced the values they were solved from.
#[derive(Debug, Clone)]
struct SplineCache<T> {
    tail: Vec<T>,
    second_derivatives: Vec<T>,
}

/// One node of a lookup table tree.
///
/// Holds a strictly increasing grid of independent coordinates and the
/// dependent value at each one. Reading a point brackets the first
/// coordinate on this node's grid, reads the dependents at the points the
/// [`Style`] needs (recursing into nested tables with the remaining
/// coordinates), and combines them.
///
/// `style` and `extrapolate` belong to this node only; nested tables carry
/// their own. With `extrapolate` off, coordinates outside the grid are held
/// at the boundary value instead.
///
/// Reads update internal caches (the last bracketed cell, and the spline
/// second derivatives) through shared references, so a `Table` can move
/// between threads but can not be shared by them.
#[derive(Debug, Clone)]
pub struct Table<T: Float> {
    independents: Vec<T>,
    dependents: Dependents<T>,
    extrapolate: bool,
    style: Style,
    last_bracket: Cell<usize>,
    spline_cache: RefCell<Option<SplineCache<T>>>,
}

impl<T: Float> Table<T> {
    /// Build a last-dimension table with a scalar value at each coordinate.
    ///
    /// # Errors
    /// * If the lengths of inputs do not match
    /// * If there are fewer than 2 points
    /// * If `independents` is not strictly increasing
    pub fn new(
        independents: impl Into<Vec<T>>,
        values: impl Into<Vec<T>>,
    ) -> Result<Self, TableError> {
        Self::from_dependents(independents.into(), Dependents::Scalars(values.into()))
    }

    /// Build a table one dimension above `tables`, which need not share grids.
    ///
    /// # Errors
    /// Same as [`Table::new`]. Nested tables are not checked for a
    /// consistent depth here; a mismatch surfaces as an arity error on read.
    pub fn nested(
        independents: impl Into<Vec<T>>,
        tables: impl Into<Vec<Table<T>>>,
    ) -> Result<Self, TableError> {
        Self::from_dependents(independents.into(), Dependents::Tables(tables.into()))
    }

    /// Build a table from `(coordinate, value)` pairs in any order.
    ///
    /// # Errors
    /// Same as [`Table::new`]; a repeated coordinate is not strictly increasing.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, T)>) -> Result<Self, TableError> {
        let (independents, values) = sorted_pairs(pairs);
        Self::from_dependents(independents, Dependents::Scalars(values))
    }

    /// Build a table from `(coordinate, table)` pairs in any order.
    pub fn nested_from_pairs(
        pairs: impl IntoIterator<Item = (T, Table<T>)>,
    ) -> Result<Self, TableError> {
        let (independents, tables) = sorted_pairs(pairs);
        Self::from_dependents(independents, Dependents::Tables(tables))
    }

    /// Build a table, then call `configure` once on it before returning.
    pub fn new_with(
        independents: impl Into<Vec<T>>,
        values: impl Into<Vec<T>>,
        configure: impl FnOnce(&mut Self),
    ) -> Result<Self, TableError> {
        let mut table = Self::new(independents, values)?;
        configure(&mut table);
        Ok(table)
    }

    /// Build a nested table, then call `configure` once on it before returning.
    pub fn nested_with(
        independents: impl Into<Vec<T>>,
        tables: impl Into<Vec<Table<T>>>,
        configure: impl FnOnce(&mut Self),
    ) -> Result<Self, TableError> {
        let mut table = Self::nested(independents, tables)?;
        configure(&mut table);
        Ok(table)
    }

    pub fn from_dependents(
        independents: Vec<T>,
        dependents: Dependents<T>,
    ) -> Result<Self, TableError> {
        let n = independents.len();
        if dependents.len() != n {
            return Err(ConstructionError::LengthMismatch {
                independents: n,
                dependents: dependents.len(),
            }
            .into());
        }
        if n < 2 {
            return Err(ConstructionError::TooFewPoints { got: n }.into());
        }
        // Negated so that NaN is rejected too
        if let Some(index) = (1..n).find(|&i| !(independents[i] > independents[i - 1])) {
            return Err(ConstructionError::NotStrictlyIncreasing { index }.into());
        }

        log::debug!(
            "built table level with {n} points and {} dependents",
            match dependents {
                Dependents::Scalars(_) => "scalar",
                Dependents::Tables(_) => "nested",
            }
        );

        Ok(Self {
            independents,
            dependents,
            extrapolate: true,
            style: Style::default(),
            last_bracket: Cell::new(0),
            spline_cache: RefCell::new(None),
        })
    }

    /// Set the style, consuming and returning the table.
    pub fn with_style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    /// Set the extrapolation flag, consuming and returning the table.
    pub fn with_extrapolate(mut self, extrapolate: bool) -> Self {
        self.set_extrapolate(extrapolate);
        self
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.invalidate();
    }

    pub fn set_extrapolate(&mut self, extrapolate: bool) {
        self.extrapolate = extrapolate;
        self.invalidate();
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn extrapolate(&self) -> bool {
        self.extrapolate
    }

    pub fn independents(&self) -> &[T] {
        &self.independents
    }

    pub fn dependents(&self) -> &Dependents<T> {
        &self.dependents
    }

    /// Number of sample points on this level.
    pub fn len(&self) -> usize {
        self.independents.len()
    }

    /// Always false; a table has at least 2 points.
    pub fn is_empty(&self) -> bool {
        self.independents.is_empty()
    }

    /// The dependent value at sample point `i`, if it exists.
    pub fn dependent(&self, i: usize) -> Option<Dependent<'_, T>> {
        match &self.dependents {
            Dependents::Scalars(v) => v.get(i).map(|&y| Dependent::Scalar(y)),
            Dependents::Tables(v) => v.get(i).map(Dependent::Nested),
        }
    }

    /// Mutable access to the nested table at sample point `i`, so that its
    /// configuration can be changed in place. Returns `None` for a scalar level.
    pub fn child_mut(&mut self, i: usize) -> Option<&mut Table<T>> {
        self.invalidate();
        match &mut self.dependents {
            Dependents::Scalars(_) => None,
            Dependents::Tables(v) => v.get_mut(i),
        }
    }

    /// Number of coordinates a read needs, following the first branch.
    pub fn ndims(&self) -> usize {
        match &self.dependents {
            Dependents::Scalars(_) => 1,
            Dependents::Tables(v) => 1 + v[0].ndims(),
        }
    }

    /// Drop cached values that depend on the configuration of this node
    /// or anything below it.
    fn invalidate(&mut self) {
        *self.spline_cache.get_mut() = None;
    }
}

fn sorted_pairs<T: Float, D>(pairs: impl IntoIterator<Item = (T, D)>) -> (Vec<T>, Vec<D>) {
    let mut pairs: Vec<(T, D)> = pairs.into_iter().collect();
    // Incomparable (NaN) coordinates are left in place and rejected by validation
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    pairs.into_iter().unzip()
}
