// generator.rs - Random square grids of cows and grass

use crate::{CellType, Grid, GridError, MAX_GRID_SIDE};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates a random grid with a side drawn uniformly from `1..=max_side`.
///
/// The number of cows is drawn uniformly from `1..=side²`, the remaining
/// cells are grass, and the whole sequence is shuffled so every ordering is
/// equally likely. The grid therefore always holds at least one cow.
pub fn generate_grid<R: Rng + ?Sized>(rng: &mut R, max_side: usize) -> Result<Grid, GridError> {
    if max_side == 0 || max_side > MAX_GRID_SIDE {
        return Err(GridError::SideOutOfRange {
            side: max_side,
            max: MAX_GRID_SIDE,
        });
    }

    let side = rng.gen_range(1..=max_side);
    let cell_count = side * side;
    let cows = rng.gen_range(1..=cell_count);

    let mut cells = vec![CellType::Cow; cows];
    cells.resize(cell_count, CellType::Grass);
    cells.shuffle(rng);

    debug!("generated {}x{} grid with {} cows", side, side, cows);
    Ok(Grid::from_parts(side, cells))
}
