//! Recursively nested lookup tables with interpolation and extrapolation.
//!
//! A [`Table`] maps a strictly increasing grid of coordinates to dependent
//! values, each either a scalar or another table. Reading an N-dimensional
//! point brackets the first coordinate, reads the nested tables at the
//! bracketing points with the remaining coordinates, and combines the
//! results with the level's [`Style`]:
//!
//! | Style       | Points | Method                                   |
//! |-------------|--------|------------------------------------------|
//! | `Linear`    | 2      | straight line                            |
//! | `Lagrange2` | 3      | quadratic Lagrange polynomial            |
//! | `Lagrange3` | 4      | cubic Lagrange polynomial                |
//! | `Cubic`     | 3      | natural cubic spline over the whole level|
//! | `Catmull`   | 2      | Catmull-Rom (cubic Hermite) spline       |
//!
//! ```rust
//! use interptable::{Style, Table};
//!
//! let t = Table::<f64>::new([1.5, 2.0, 3.0, 4.0], [4.0, 5.0, 6.0, 7.0])
//!     .unwrap()
//!     .with_style(Style::Catmull);
//! assert!((t.read(&[1.0]).unwrap() - 3.666667).abs() < 1e-5);
//!
//! let t = t.with_extrapolate(false);
//! assert_eq!(t.read(&[1.0]).unwrap(), 4.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod error;
pub mod one_dim;
pub mod style;
pub mod table;

pub use error::{ArityError, ConstructionError, TableError};
pub use style::Style;
pub use table::{Dependent, Dependents, Table};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
