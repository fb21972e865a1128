// board.rs - Tile layout prepared off the UI thread, ready to paint

use cows::{CellType, GridSnapshot};
use egui::{Pos2, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub cell: CellType,
}

/// Everything the painter needs for one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBoard {
    pub generation: u64,
    pub side: usize,
    pub tiles: Vec<Tile>,
}

impl TileBoard {
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Self {
        let tiles = snapshot
            .grid
            .iter_cells()
            .map(|(row, col, cell)| Tile { row, col, cell })
            .collect();
        Self {
            generation: snapshot.generation,
            side: snapshot.grid.side(),
            tiles,
        }
    }

    /// Largest square tile that fits `side` tiles across `available`,
    /// capped at `max_tile`.
    pub fn tile_size(&self, available: Vec2, max_tile: f32) -> f32 {
        if self.side == 0 {
            return 0.0;
        }
        let fit = available.x.min(available.y) / self.side as f32;
        fit.min(max_tile).max(0.0)
    }

    /// Screen rect for every tile, with the whole board centred in `area`.
    pub fn layout(&self, area: Rect, max_tile: f32) -> Vec<(Rect, CellType)> {
        let size = self.tile_size(area.size(), max_tile);
        let extent = size * self.side as f32;
        let origin = Pos2::new(
            area.min.x + (area.width() - extent).max(0.0) / 2.0,
            area.min.y + (area.height() - extent).max(0.0) / 2.0,
        );

        self.tiles
            .iter()
            .map(|tile| {
                let min = origin + Vec2::new(tile.col as f32 * size, tile.row as f32 * size);
                (Rect::from_min_size(min, Vec2::splat(size)), tile.cell)
            })
            .collect()
    }
}

/// Holds the board currently on screen. Hand-offs can finish out of order,
/// so an older generation never replaces a newer one.
#[derive(Debug, Default)]
pub struct BoardSlot {
    current: Option<TileBoard>,
}

impl BoardSlot {
    /// Returns true if `board` was installed.
    pub fn offer(&mut self, board: TileBoard) -> bool {
        match &self.current {
            Some(current) if current.generation >= board.generation => false,
            _ => {
                self.current = Some(board);
                true
            }
        }
    }

    pub fn current(&self) -> Option<&TileBoard> {
        self.current.as_ref()
    }
}
