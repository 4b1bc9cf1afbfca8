use std::fmt;

use egui::Pos2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brush::Brush;
use crate::color::Rgba;

/// Identifier pairing a stroke's started event with its finished event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeId(Uuid);

impl StrokeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The transient preview line shown between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Pos2,
    pub end: Pos2,
}

impl Line {
    /// A degenerate line anchored where the stroke began.
    pub fn point(pos: Pos2) -> Self {
        Self { start: pos, end: pos }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    FreeDrawing,
    Line,
}

/// Object properties carried by draw lifecycle events: the canvas defaults
/// when a stroke starts, the finalized shape when it ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProperties {
    pub kind: ShapeKind,
    pub stroke_width: f32,
    pub stroke_color: Rgba,
    pub start: Option<Pos2>,
    pub end: Option<Pos2>,
}

impl ShapeProperties {
    pub fn free_drawing(brush: &Brush) -> Self {
        Self {
            kind: ShapeKind::FreeDrawing,
            stroke_width: brush.width,
            stroke_color: brush.color,
            start: None,
            end: None,
        }
    }

    pub fn line(brush: &Brush, line: &Line) -> Self {
        Self {
            kind: ShapeKind::Line,
            stroke_width: brush.width,
            stroke_color: brush.color,
            start: Some(line.start),
            end: Some(line.end),
        }
    }
}
