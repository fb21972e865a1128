// ui.rs - Window layout: tile grid in the centre, controls along the bottom

use crate::app::{ABOUT_TEXT, CowsApp};
use cows::CellType;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::debug;

const BACKGROUND: Color32 = Color32::from_gray(64);
const PANEL: Color32 = Color32::from_gray(90);
const GRASS: Color32 = Color32::from_rgb(76, 153, 60);
const COW_HIDE: Color32 = Color32::WHITE;
const COW_SPOT: Color32 = Color32::from_gray(20);

impl eframe::App for CowsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_boards();

        // Controls
        egui::TopBottomPanel::bottom("actions")
            .frame(egui::Frame::default().fill(PANEL).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.x = self.config.action_spacing;
                ui.horizontal(|ui| {
                    if ui.button("Generate grid").clicked() {
                        self.regenerate();
                    }
                    ui.label(self.corner_label.as_str());
                    ui.label(self.neighbor_label.as_str());
                    if ui.button("About").clicked() {
                        debug!("about dialog opened");
                        self.show_about = true;
                    }
                });
            });

        if self.show_about {
            let mut open = true;
            egui::Window::new("About")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(ABOUT_TEXT);
                    if ui.button("OK").clicked() {
                        self.show_about = false;
                    }
                });
            if !open {
                self.show_about = false;
            }
        }

        // Grid
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());

                let Some(board) = self.board.current() else {
                    return; // First hand-off still in flight
                };

                for (rect, cell) in board.layout(response.rect, self.config.tile_size) {
                    paint_tile(&painter, rect, cell);
                }
            });
    }
}

fn paint_tile(painter: &egui::Painter, rect: Rect, cell: CellType) {
    painter.rect_filled(rect, 0.0, GRASS);
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, BACKGROUND));

    if cell == CellType::Cow {
        let size = rect.width();
        let center = rect.center();
        painter.circle_filled(center, size * 0.32, COW_HIDE);
        painter.circle_filled(center + Vec2::new(-size * 0.12, -size * 0.08), size * 0.08, COW_SPOT);
        painter.circle_filled(center + Vec2::new(size * 0.1, size * 0.1), size * 0.06, COW_SPOT);
    }
}
