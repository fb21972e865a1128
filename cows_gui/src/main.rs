// main.rs - Cows! desktop app: random cow/grass grids and their counters

use eframe::egui;
use std::path::PathBuf;

mod app;    // State and render hand-off
mod board;  // Tile layout
mod config; // Window settings
mod error;  // Startup errors
mod ui;     // eframe::App impl

use app::CowsApp;
use config::GuiConfig;
use error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(GuiConfig::DEFAULT_PATH));
    let config = GuiConfig::load(&config_path)?;
    let runtime = tokio::runtime::Runtime::new().map_err(AppError::Runtime)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(CowsApp::new(config, runtime, cc.egui_ctx.clone()))
        }),
    )?;
    Ok(())
}
