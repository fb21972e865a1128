// lib.rs - Cows grid core: generation, statistics and the regenerate loop

mod cell;       // Cow / Grass
mod error;      // Grid construction errors
mod grid;       // Square grid storage and edge indexes
mod generator;  // Random grid generation
mod stats;      // Corner and neighbour counting
mod controller; // Generate -> count -> present

pub use cell::CellType;
pub use controller::{Controller, DisplaySurface, GridSnapshot};
pub use error::GridError;
pub use generator::generate_grid;
pub use grid::{EdgeIndexes, Grid, MAX_GRID_SIDE};
pub use stats::{GridStats, corners_with_cows, cows_with_neighbors};
