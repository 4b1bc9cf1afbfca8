#![warn(clippy::all, rust_2018_idioms)]

pub mod brush;
pub mod canvas;
pub mod color;
pub mod config;
pub mod controller;
pub mod event;
pub mod input;
pub mod shape;

pub use brush::{Brush, BrushSettings};
pub use canvas::Canvas;
pub use color::Rgba;
pub use config::FreeDrawingConfig;
pub use controller::FreeDrawingController;
pub use event::{DrawEvent, EventBus, EventHandler, Subscription};
pub use input::PointerEvent;
pub use shape::{Line, ShapeKind, ShapeProperties, StrokeId};
