//! Error types for table construction, configuration and lookup.

use alloc::string::String;
use thiserror::Error;

use crate::Style;

/// Reasons a table can not be built from the supplied points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("length mismatch: {independents} independents, {dependents} dependents")]
    LengthMismatch {
        independents: usize,
        dependents: usize,
    },

    #[error("too few points: got {got}, need at least 2")]
    TooFewPoints { got: usize },

    /// `index` is the first coordinate that is not greater than its predecessor.
    #[error("independents must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },
}

/// Mismatch between the number of query coordinates and the depth of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("no coordinates supplied")]
    NoCoordinates,

    #[error("too few coordinates: reached a nested table with none remaining")]
    TooFewCoordinates,

    #[error("too many coordinates: reached a scalar with coordinates remaining")]
    TooManyCoordinates,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("construction failed: {0}")]
    Construction(#[from] ConstructionError),

    #[error("{style} interpolation needs at least {required} points, table has {available}")]
    InsufficientData {
        style: Style,
        required: usize,
        available: usize,
    },

    #[error("arity mismatch: {0}")]
    Arity(#[from] ArityError),

    #[error("unknown interpolation style `{0}`")]
    UnknownStyle(String),

    #[error("invalid number format pattern `{0}`")]
    InvalidPattern(String),

    #[error("length mismatch between observation columns or output")]
    LengthMismatch,
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_messages() {
        let err = TableError::from(ConstructionError::TooFewPoints { got: 1 });
        assert_eq!(
            err.to_string(),
            "construction failed: too few points: got 1, need at least 2"
        );

        let err = TableError::InsufficientData {
            style: Style::Lagrange3,
            required: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "lagrange3 interpolation needs at least 4 points, table has 3"
        );

        let err = TableError::from(ArityError::NoCoordinates);
        assert_eq!(err.to_string(), "arity mismatch: no coordinates supplied");
    }
}
