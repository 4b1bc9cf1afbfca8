use egui::Pos2;

/// Pointer events the host feeds into the controller.
///
/// Positions are already mapped to canvas coordinates; raw device events and
/// coordinate transforms stay with the host engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button was pressed on the canvas
    Down { pos: Pos2 },
    /// Pointer moved (with or without the button held)
    Move { pos: Pos2 },
    /// Primary button was released
    Up { pos: Pos2 },
}

impl PointerEvent {
    pub fn pos(&self) -> Pos2 {
        match *self {
            Self::Down { pos } | Self::Move { pos } | Self::Up { pos } => pos,
        }
    }
}
