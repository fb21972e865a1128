// app.rs - App state and the hand-off from grid generation to painting

use crate::board::{BoardSlot, TileBoard};
use crate::config::GuiConfig;
use cows::{Controller, DisplaySurface, GridSnapshot};
use log::{debug, error, warn};
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const ABOUT_TEXT: &str = "\
Cows! A remake of a small programming exercise.

'Generate grid' builds a new square grid whose side is somewhere between \
1 and 7. Every grid holds at least one cow; the rest is grass.

'Cows in corners' counts the cows standing in the four outermost corners. \
A grid with a single tile has no corners.

'Number of cows with neighbors' counts the cows that have another cow \
directly beside, above or below them. Diagonal cows do not count, and a cow \
at the end of one row is not a neighbour of the cow starting the next.";

pub fn corner_text(count: usize) -> String {
    format!("Cows in corners: {}", count)
}

pub fn neighbor_text(count: usize) -> String {
    format!("Number of cows with neighbors: {}", count)
}

/// Display surface that lays out tiles on the tokio runtime and wakes the UI
/// when the board is ready.
pub struct RenderHandOff {
    runtime: Handle,
    boards: UnboundedSender<TileBoard>,
    ctx: egui::Context,
}

impl RenderHandOff {
    pub fn new(runtime: Handle, boards: UnboundedSender<TileBoard>, ctx: egui::Context) -> Self {
        Self { runtime, boards, ctx }
    }
}

impl DisplaySurface for RenderHandOff {
    fn present(&mut self, snapshot: Arc<GridSnapshot>) {
        let boards = self.boards.clone();
        let ctx = self.ctx.clone();

        // Fire and forget: nothing waits on this task
        self.runtime.spawn(async move {
            let board = TileBoard::from_snapshot(&snapshot);
            debug!("board #{} ready ({} tiles)", board.generation, board.tiles.len());
            if boards.send(board).is_err() {
                warn!("board #{} dropped, window already closed", snapshot.generation);
                return;
            }
            ctx.request_repaint();
        });
    }
}

pub struct CowsApp {
    pub config: GuiConfig,
    pub corner_label: String,
    pub neighbor_label: String,
    pub show_about: bool,
    pub board: BoardSlot,

    controller: Controller,
    surface: RenderHandOff,
    boards: UnboundedReceiver<TileBoard>,
    _runtime: Runtime, // Owns the workers the hand-off spawns on
}

impl CowsApp {
    /// Builds the app and generates the first grid straight away.
    pub fn new(config: GuiConfig, runtime: Runtime, ctx: egui::Context) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let surface = RenderHandOff::new(runtime.handle().clone(), tx, ctx);

        let mut app = Self {
            config,
            corner_label: "Cows in corners: ".to_owned(),
            neighbor_label: "Number of cows with neighbors: ".to_owned(),
            show_about: false,
            board: BoardSlot::default(),
            controller: Controller::from_entropy(),
            surface,
            boards: rx,
            _runtime: runtime,
        };
        app.regenerate();
        app
    }

    /// New grid, new counters. Labels change immediately; the tiles follow
    /// once the hand-off task delivers them.
    pub fn regenerate(&mut self) {
        match self.controller.regenerate(&mut self.surface) {
            Ok(snapshot) => {
                self.corner_label = corner_text(snapshot.stats.corner_cows);
                self.neighbor_label = neighbor_text(snapshot.stats.neighbor_cows);
            }
            Err(err) => error!("could not generate grid: {}", err),
        }
    }

    pub fn generation(&self) -> u64 {
        self.controller.generation()
    }

    /// Moves every delivered board into the slot.
    pub fn receive_boards(&mut self) {
        while let Ok(board) = self.boards.try_recv() {
            let generation = board.generation;
            if !self.board.offer(board) {
                debug!("discarding stale board #{}", generation);
            }
        }
    }
}
