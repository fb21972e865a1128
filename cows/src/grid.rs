// grid.rs - Square grid of cells stored flat in row-major order

use crate::{CellType, GridError};
use smallvec::SmallVec;

pub const MAX_GRID_SIDE: usize = 7; // Largest side the generator will draw

/// An immutable N×N grid. Index `i` is row `i / N`, column `i % N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Builds a grid from caller-supplied cells.
    ///
    /// The side must lie in `1..=MAX_GRID_SIDE` and `cells` must hold exactly
    /// `side * side` entries.
    pub fn from_cells(side: usize, cells: Vec<CellType>) -> Result<Self, GridError> {
        if side == 0 || side > MAX_GRID_SIDE {
            return Err(GridError::SideOutOfRange {
                side,
                max: MAX_GRID_SIDE,
            });
        }
        let expected = side * side;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                side,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Draws a fresh grid from the thread-local RNG.
    pub fn random(max_side: usize) -> Result<Self, GridError> {
        crate::generate_grid(&mut rand::thread_rng(), max_side)
    }

    // Generator output is correct by construction
    pub(crate) fn from_parts(side: usize, cells: Vec<CellType>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellType> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells.get(row * self.side + col).copied()
    }

    pub fn cow_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_cow()).count()
    }

    pub fn grass_count(&self) -> usize {
        self.cell_count() - self.cow_count()
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellType)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / side, i % side, cell))
    }
}

/// Flat indexes of the first and last column of an N×N grid.
///
/// Neighbour lookups use these to reject `i - 1` / `i + 1` when that step
/// would cross into another row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeIndexes {
    left: SmallVec<[usize; MAX_GRID_SIDE]>,
    right: SmallVec<[usize; MAX_GRID_SIDE]>,
}

impl EdgeIndexes {
    pub fn for_side(side: usize) -> Self {
        let left = (0..side).map(|row| row * side).collect();
        let right = (0..side).map(|row| row * side + side - 1).collect();
        Self { left, right }
    }

    pub fn left(&self) -> &[usize] {
        &self.left
    }

    pub fn right(&self) -> &[usize] {
        &self.right
    }

    pub fn is_left(&self, index: usize) -> bool {
        self.left.contains(&index)
    }

    pub fn is_right(&self, index: usize) -> bool {
        self.right.contains(&index)
    }
}
