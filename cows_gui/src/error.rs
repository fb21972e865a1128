// error.rs - Startup failures of the desktop app

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum AppError {
    /// Config file exists but could not be read
    ConfigIo(io::Error),
    /// Config file is not valid JSON for `GuiConfig`
    ConfigParse(serde_json::Error),
    /// Tokio runtime could not be started
    Runtime(io::Error),
    /// Window or renderer failed
    Ui(eframe::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigIo(err) => write!(f, "could not read config: {}", err),
            AppError::ConfigParse(err) => write!(f, "invalid config: {}", err),
            AppError::Runtime(err) => write!(f, "could not start async runtime: {}", err),
            AppError::Ui(err) => write!(f, "window failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::ConfigIo(err) | AppError::Runtime(err) => Some(err),
            AppError::ConfigParse(err) => Some(err),
            AppError::Ui(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigParse(err)
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Ui(err)
    }
}
