use egui::Pos2;
use log::{debug, trace};

use crate::brush::{Brush, BrushSettings};
use crate::canvas::Canvas;
use crate::config::FreeDrawingConfig;
use crate::event::{DrawEvent, EventBus};
use crate::input::PointerEvent;
use crate::shape::{Line, ShapeProperties, StrokeId};

/// Which pointer listeners are currently registered.
///
/// `down` is set exactly while drawing mode is active; `motion` and `up`
/// only between a pointer-down and the following pointer-up, so move/up
/// events can never arrive before the down that started their stroke.
#[derive(Debug, Clone, Copy, Default)]
struct ListenerSet {
    down: bool,
    motion: bool,
    up: bool,
}

/// Toggles free-drawing mode on a host [`Canvas`] and relays the stroke
/// lifecycle as [`DrawEvent`]s.
///
/// The controller owns the brush configuration and the event bus; the host
/// engine owns everything else. Pointer events are forwarded through
/// [`handle_pointer`](Self::handle_pointer) and ignored unless the matching
/// listener is registered.
pub struct FreeDrawingController {
    brush: Brush,
    preview_line: bool,
    active: bool,
    listeners: ListenerSet,
    line: Option<Line>,
    stroke: Option<StrokeId>,
    events: EventBus,
}

impl Default for FreeDrawingController {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeDrawingController {
    pub fn new() -> Self {
        Self::from_config(&FreeDrawingConfig::default())
    }

    pub fn from_config(config: &FreeDrawingConfig) -> Self {
        Self {
            brush: config.brush(),
            preview_line: config.preview_line,
            active: false,
            listeners: ListenerSet::default(),
            line: None,
            stroke: None,
            events: EventBus::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        "FreeDrawing"
    }

    /// The bus on which draw lifecycle events are published.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start free drawing mode.
    ///
    /// Applies `settings` on top of the current brush and registers the
    /// pointer-down listener. Calling this while already active is harmless:
    /// the listener is a flag, so it cannot be registered twice.
    pub fn start(&mut self, canvas: &mut dyn Canvas, settings: Option<BrushSettings>) {
        canvas.set_drawing_mode(true);
        self.set_brush(canvas, settings);

        if !self.active {
            debug!("{}: drawing mode enabled", self.name());
        }
        self.active = true;
        self.listeners.down = true;
    }

    /// Update brush width and/or color and push the result into the canvas.
    ///
    /// Fields missing from `settings` keep their current value.
    pub fn set_brush(&mut self, canvas: &mut dyn Canvas, settings: Option<BrushSettings>) {
        if let Some(settings) = settings {
            self.brush.apply(&settings);
        }
        canvas.apply_brush(&self.brush);
        debug!(
            "{}: brush width {} color {}",
            self.name(),
            self.brush.width,
            self.brush.color
        );
    }

    /// End free drawing mode, dropping any in-progress preview.
    ///
    /// Safe to call when not started.
    pub fn end(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_drawing_mode(false);

        if self.line.take().is_some() {
            canvas.set_preview_line(None);
        }
        self.stroke = None;
        self.listeners = ListenerSet::default();

        if self.active {
            debug!("{}: drawing mode disabled", self.name());
        }
        self.active = false;
    }

    /// Feed a pointer event from the host.
    ///
    /// Events with no matching registered listener are dropped: a move or
    /// up without a preceding down is a no-op.
    pub fn handle_pointer(&mut self, canvas: &mut dyn Canvas, event: PointerEvent) {
        match event {
            PointerEvent::Down { pos } if self.listeners.down => self.on_pointer_down(canvas, pos),
            PointerEvent::Move { pos } if self.listeners.motion => self.on_pointer_move(canvas, pos),
            PointerEvent::Up { pos } if self.listeners.up => self.on_pointer_up(canvas, pos),
            _ => trace!("{}: no listener for {:?}", self.name(), event),
        }
    }

    fn on_pointer_down(&mut self, canvas: &mut dyn Canvas, pos: Pos2) {
        self.listeners.motion = true;
        self.listeners.up = true;

        let stroke = StrokeId::new();
        self.stroke = Some(stroke);

        if self.preview_line {
            let line = Line::point(pos);
            self.line = Some(line);
            canvas.set_preview_line(Some(line));
        }

        trace!("{}: stroke {} started at {:?}", self.name(), stroke, pos);
        self.events.emit(DrawEvent::Started {
            stroke,
            properties: canvas.shape_defaults(),
        });
    }

    fn on_pointer_move(&mut self, canvas: &mut dyn Canvas, pos: Pos2) {
        if let Some(line) = &mut self.line {
            line.end = pos;
            canvas.set_preview_line(Some(*line));
            canvas.request_render();
        }
    }

    fn on_pointer_up(&mut self, canvas: &mut dyn Canvas, pos: Pos2) {
        let properties = match self.line.take() {
            Some(line) => {
                canvas.set_preview_line(None);
                ShapeProperties::line(&self.brush, &line)
            }
            None => canvas.shape_defaults(),
        };

        // The up listener is only registered inside the down handler, so a
        // stroke id is always present; the fallback is purely defensive.
        let stroke = self.stroke.take().unwrap_or_default();
        trace!("{}: stroke {} finished at {:?}", self.name(), stroke, pos);
        self.events.emit(DrawEvent::Finished { stroke, properties });

        self.listeners.motion = false;
        self.listeners.up = false;
    }
}
