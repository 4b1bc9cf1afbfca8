use crate::shape::{ShapeProperties, StrokeId};

/// Semantic draw lifecycle events re-published by the controller for
/// downstream consumers (object lists, history, autosave, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// A stroke began: pointer-down while drawing mode is active. Carries
    /// the canvas's current default object properties.
    Started {
        stroke: StrokeId,
        properties: ShapeProperties,
    },
    /// A stroke was finalized on pointer-up, with the finished shape's
    /// properties.
    Finished {
        stroke: StrokeId,
        properties: ShapeProperties,
    },
}

impl DrawEvent {
    pub fn stroke(&self) -> StrokeId {
        match *self {
            Self::Started { stroke, .. } | Self::Finished { stroke, .. } => stroke,
        }
    }

    pub fn properties(&self) -> &ShapeProperties {
        match self {
            Self::Started { properties, .. } | Self::Finished { properties, .. } => properties,
        }
    }
}
