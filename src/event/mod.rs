mod bus;
mod events;

pub use bus::{EventBus, Subscription};
pub use events::DrawEvent;

/// Receives draw lifecycle events published on an [`EventBus`].
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &DrawEvent);
}
