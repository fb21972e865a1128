// controller.rs - Regenerate loop between the core and whatever draws it

use crate::{Grid, GridError, GridStats, MAX_GRID_SIDE, generate_grid};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// A fully built grid with its statistics. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub generation: u64, // Increases by one per regeneration
    pub grid: Grid,
    pub stats: GridStats,
}

impl GridSnapshot {
    pub fn new(generation: u64, grid: Grid) -> Self {
        let stats = GridStats::compute(&grid);
        Self {
            generation,
            grid,
            stats,
        }
    }
}

/// Receives each finished snapshot. Implementations may hand the snapshot
/// to another thread; it is immutable and shared by `Arc`.
pub trait DisplaySurface {
    fn present(&mut self, snapshot: Arc<GridSnapshot>);
}

pub struct Controller<R = StdRng> {
    rng: R,
    max_side: usize,
    generation: u64,
}

impl Controller<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Controller<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_side: MAX_GRID_SIDE,
            generation: 0,
        }
    }

    pub fn with_max_side(rng: R, max_side: usize) -> Result<Self, GridError> {
        if max_side == 0 || max_side > MAX_GRID_SIDE {
            return Err(GridError::SideOutOfRange {
                side: max_side,
                max: MAX_GRID_SIDE,
            });
        }
        Ok(Self {
            rng,
            max_side,
            generation: 0,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Builds the next grid and its statistics without presenting them.
    pub fn next_snapshot(&mut self) -> Result<GridSnapshot, GridError> {
        let grid = generate_grid(&mut self.rng, self.max_side)?;
        self.generation += 1;
        Ok(GridSnapshot::new(self.generation, grid))
    }

    /// Generates a new grid, counts it, and hands the result to `surface`.
    ///
    /// Everything up to `present` runs on the caller's thread, so the surface
    /// only ever sees complete snapshots.
    pub fn regenerate<S>(&mut self, surface: &mut S) -> Result<Arc<GridSnapshot>, GridError>
    where
        S: DisplaySurface + ?Sized,
    {
        let snapshot = Arc::new(self.next_snapshot()?);
        info!(
            "grid #{}: {}x{}, {} cows, {} in corners, {} with neighbours",
            snapshot.generation,
            snapshot.grid.side(),
            snapshot.grid.side(),
            snapshot.grid.cow_count(),
            snapshot.stats.corner_cows,
            snapshot.stats.neighbor_cows,
        );
        surface.present(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}
