use crate::brush::Brush;
use crate::shape::{Line, ShapeProperties};

/// The surface the controller drives on the host graphics engine.
///
/// The engine owns pointer tracking, coordinate transforms, stroke
/// interpolation, and rendering. The controller only flips drawing mode,
/// configures the active brush, and manages the transient preview line.
pub trait Canvas {
    /// Enable or disable free-drawing mode.
    fn set_drawing_mode(&mut self, enabled: bool);

    fn is_drawing_mode(&self) -> bool;

    /// Push the brush configuration into the engine's active brush.
    fn apply_brush(&mut self, brush: &Brush);

    /// Default properties for newly created objects.
    fn shape_defaults(&self) -> ShapeProperties;

    /// Create, move, or clear the transient preview line.
    fn set_preview_line(&mut self, line: Option<Line>);

    /// Ask the engine to redraw.
    fn request_render(&mut self);
}
