use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::brush::{Brush, DEFAULT_WIDTH};
use crate::color::Rgba;

/// Errors that can occur while loading a controller configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Read(#[from] std::io::Error),
}

/// Startup configuration for the free drawing controller.
///
/// Colors are written as CSS strings, so a config file looks like:
/// `{"width": 20, "color": "rgba(255,0,0,1)", "preview_line": true}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeDrawingConfig {
    /// Initial brush width
    pub width: f32,
    /// Initial brush color
    pub color: Rgba,
    /// Track a transient preview line between pointer-down and pointer-up
    pub preview_line: bool,
}

impl Default for FreeDrawingConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: Rgba::default(),
            preview_line: false,
        }
    }
}

impl FreeDrawingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The brush this configuration describes.
    pub fn brush(&self) -> Brush {
        Brush {
            width: self.width,
            color: self.color,
        }
    }
}
