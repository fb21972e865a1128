// error.rs - Errors raised when a grid is built from outside input

use std::fmt;

/// Errors from constructing or generating a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Side length is zero or above the supported maximum.
    SideOutOfRange { side: usize, max: usize },
    /// Number of cells does not equal `side * side`.
    CellCountMismatch {
        side: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SideOutOfRange { side, max } => {
                write!(f, "grid side {} out of range 1..={}", side, max)
            }
            GridError::CellCountMismatch {
                side,
                expected,
                actual,
            } => write!(
                f,
                "a {}x{} grid needs {} cells, got {}",
                side, side, expected, actual
            ),
        }
    }
}

impl std::error::Error for GridError {}
