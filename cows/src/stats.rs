// stats.rs - Corner cows and cows with an orthogonal cow neighbour

use crate::{CellType, EdgeIndexes, Grid};
use smallvec::SmallVec;

/// Both statistics for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    pub corner_cows: usize,
    pub neighbor_cows: usize,
}

impl GridStats {
    pub fn compute(grid: &Grid) -> Self {
        Self {
            corner_cows: corners_with_cows(grid.side(), grid.cells()),
            neighbor_cows: cows_with_neighbors(grid.side(), grid.cells()),
        }
    }
}

fn is_cow(cells: &[CellType], index: usize) -> bool {
    matches!(cells.get(index), Some(CellType::Cow))
}

/// Counts cows on the four extreme corners. A grid of side 0 or 1 has no
/// corners and always yields 0.
pub fn corners_with_cows(side: usize, cells: &[CellType]) -> usize {
    if side <= 1 {
        return 0;
    }
    let last = side * side - 1;
    let corners = [0, side - 1, last + 1 - side, last]; // TL, TR, BL, BR
    corners.iter().filter(|&&i| is_cow(cells, i)).count()
}

/// Up, down, left and right of `index`, minus anything off the grid and any
/// horizontal step that would wrap onto a neighbouring row.
fn orthogonal_neighbours(index: usize, side: usize, edges: &EdgeIndexes) -> SmallVec<[usize; 4]> {
    let len = side * side;

    let up = index.checked_sub(side);
    let down = Some(index + side).filter(|&i| i < len);
    let left = index
        .checked_sub(1)
        .filter(|&i| !(edges.is_left(index) && edges.is_right(i)));
    let right = Some(index + 1)
        .filter(|&i| i < len)
        .filter(|&i| !(edges.is_right(index) && edges.is_left(i)));

    [up, down, left, right].into_iter().flatten().collect()
}

/// Counts cows that have at least one cow directly above, below, left or
/// right of them. Diagonals and row wraparound do not count.
pub fn cows_with_neighbors(side: usize, cells: &[CellType]) -> usize {
    if side == 0 {
        return 0;
    }
    let edges = EdgeIndexes::for_side(side);

    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_cow())
        .filter(|&(i, _)| {
            orthogonal_neighbours(i, side, &edges)
                .iter()
                .any(|&n| is_cow(cells, n))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellType::{Cow, Grass};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn cows_at(side: usize, cows: &[usize]) -> Vec<CellType> {
        (0..side * side)
            .map(|i| if cows.contains(&i) { Cow } else { Grass })
            .collect()
    }

    // ── Corners ─────────────────────────────────────────────────

    #[test]
    fn single_cell_has_no_corners() {
        assert_eq!(corners_with_cows(1, &[Cow]), 0);
        assert_eq!(corners_with_cows(0, &[]), 0);
    }

    #[test]
    fn full_two_by_two_has_four_corners() {
        assert_eq!(corners_with_cows(2, &[Cow, Cow, Cow, Cow]), 4);
    }

    #[test]
    fn corners_ignore_the_middle() {
        let cells = cows_at(3, &[1, 3, 4, 5, 7]);
        assert_eq!(corners_with_cows(3, &cells), 0);
        let cells = cows_at(3, &[0, 2, 6, 8]);
        assert_eq!(corners_with_cows(3, &cells), 4);
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn lone_corner_cow() {
        let cells = cows_at(3, &[0]);
        assert_eq!(corners_with_cows(3, &cells), 1);
        assert_eq!(cows_with_neighbors(3, &cells), 0);
    }

    #[test]
    fn horizontal_pair() {
        let cells = cows_at(3, &[0, 1]);
        assert_eq!(cows_with_neighbors(3, &cells), 2);
        assert_eq!(corners_with_cows(3, &cells), 1);
    }

    #[test]
    fn vertical_pair() {
        let cells = cows_at(3, &[1, 4]);
        assert_eq!(cows_with_neighbors(3, &cells), 2);
    }

    #[test]
    fn row_wrap_is_not_adjacency() {
        // index 2 ends row 0, index 3 starts row 1
        let cells = cows_at(3, &[2, 3]);
        assert_eq!(cows_with_neighbors(3, &cells), 0);

        let cells = cows_at(4, &[3, 4, 11, 12]);
        assert_eq!(cows_with_neighbors(4, &cells), 0);
    }

    #[test]
    fn diagonals_do_not_count() {
        let cells = cows_at(3, &[0, 4, 8]);
        assert_eq!(cows_with_neighbors(3, &cells), 0);
    }

    #[test]
    fn full_grid_all_have_neighbours() {
        for side in 2..=7 {
            let cells = vec![Cow; side * side];
            assert_eq!(cows_with_neighbors(side, &cells), side * side);
        }
        assert_eq!(cows_with_neighbors(1, &[Cow]), 0);
    }

    #[test]
    fn neighbours_of_edges() {
        let edges = EdgeIndexes::for_side(3);
        let mut n = orthogonal_neighbours(3, 3, &edges);
        n.sort();
        assert_eq!(n.as_slice(), &[0, 4, 6]);

        let mut n = orthogonal_neighbours(5, 3, &edges);
        n.sort();
        assert_eq!(n.as_slice(), &[2, 4, 8]);

        let mut n = orthogonal_neighbours(8, 3, &edges);
        n.sort();
        assert_eq!(n.as_slice(), &[5, 7]);
    }

    #[test]
    fn stats_from_grid() {
        let grid = Grid::from_cells(3, cows_at(3, &[0, 1, 8])).unwrap();
        assert_eq!(
            GridStats::compute(&grid),
            GridStats {
                corner_cows: 2,
                neighbor_cows: 2
            }
        );
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_grid() -> impl Strategy<Value = (usize, Vec<CellType>)> {
        (1usize..=7).prop_flat_map(|side| {
            let cells = prop::collection::vec(any::<bool>(), side * side)
                .prop_map(|bits| {
                    bits.into_iter()
                        .map(|b| if b { Cow } else { Grass })
                        .collect::<Vec<_>>()
                });
            (Just(side), cells)
        })
    }

    // Same metric computed from (row, col) coordinates.
    fn reference_neighbours(side: usize, cells: &[CellType]) -> usize {
        let at = |r: isize, c: isize| {
            r >= 0
                && c >= 0
                && (r as usize) < side
                && (c as usize) < side
                && cells[r as usize * side + c as usize] == Cow
        };
        let mut count = 0;
        for r in 0..side as isize {
            for c in 0..side as isize {
                if at(r, c) && (at(r - 1, c) || at(r + 1, c) || at(r, c - 1) || at(r, c + 1)) {
                    count += 1;
                }
            }
        }
        count
    }

    proptest! {
        #[test]
        fn neighbours_match_coordinate_reference((side, cells) in arb_grid()) {
            prop_assert_eq!(cows_with_neighbors(side, &cells), reference_neighbours(side, &cells));
        }

        #[test]
        fn neighbour_count_bounded_by_cows((side, cells) in arb_grid()) {
            let cows = cells.iter().filter(|c| c.is_cow()).count();
            prop_assert!(cows_with_neighbors(side, &cells) <= cows);
        }

        #[test]
        fn corners_survive_shuffling_the_rest((side, cells) in arb_grid(), seed in any::<u64>()) {
            let last = side * side - 1;
            let is_corner = |i: usize| side > 1 && (i == 0 || i == side - 1 || i == last + 1 - side || i == last);

            let mut inner: Vec<CellType> = cells
                .iter()
                .enumerate()
                .filter(|&(i, _)| !is_corner(i))
                .map(|(_, &c)| c)
                .collect();
            inner.shuffle(&mut StdRng::seed_from_u64(seed));

            let mut inner = inner.into_iter();
            let shuffled: Vec<CellType> = (0..cells.len())
                .map(|i| if is_corner(i) { cells[i] } else { inner.next().unwrap_or(Grass) })
                .collect();

            prop_assert_eq!(corners_with_cows(side, &shuffled), corners_with_cows(side, &cells));
            prop_assert!(corners_with_cows(side, &cells) <= 4);
        }
    }
}
