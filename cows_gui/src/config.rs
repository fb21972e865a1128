// config.rs - Window settings, optionally read from a JSON file

use crate::error::AppError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Display-only settings. None of these change how grids are generated or
/// counted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,      // Upper bound on one tile's edge, in points
    pub action_spacing: f32, // Gap between widgets in the bottom panel
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Cows!".to_owned(),
            width: 700.0,
            height: 600.0,
            tile_size: 100.0,
            action_spacing: 40.0,
        }
    }
}

impl GuiConfig {
    pub const DEFAULT_PATH: &'static str = "cows_gui.json";

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let config = serde_json::from_str(&text)?;
                info!("loaded config from {}", path.display());
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(AppError::ConfigIo(err)),
        }
    }
}
