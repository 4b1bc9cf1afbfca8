use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Stock brush width.
pub const DEFAULT_WIDTH: f32 = 12.0;

/// The brush configuration owned by the controller and pushed into the host
/// canvas whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub width: f32,
    pub color: Rgba,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: Rgba::default(),
        }
    }
}

impl Brush {
    /// Merge a partial settings update. Fields absent from `settings` keep
    /// their current value.
    pub fn apply(&mut self, settings: &BrushSettings) {
        if let Some(width) = settings.width {
            self.width = width;
        }
        if let Some(color) = settings.color {
            self.color = color;
        }
    }
}

/// A partial brush update: `None` fields are skipped, not zeroed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    pub width: Option<f32>,
    pub color: Option<Rgba>,
}

impl BrushSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}
