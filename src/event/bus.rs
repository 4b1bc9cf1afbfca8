use std::cell::{Cell, RefCell};
use std::fmt;

use log::trace;

use crate::event::{DrawEvent, EventHandler};

/// Token identifying a subscribed handler, returned by
/// [`EventBus::subscribe`] and accepted by [`EventBus::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Broadcasts draw lifecycle events to subscribed handlers.
///
/// Single-threaded by design: pointer events arrive serialized from the
/// host, so interior mutability is enough and no locking is involved.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<(Subscription, Box<dyn EventHandler>)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventBus({} handlers)", self.handler_count())
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to all future events. The returned token can be
    /// used to unsubscribe later.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Remove a previously subscribed handler.
    ///
    /// Returns `false` when the subscription was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(id, _)| *id != subscription);
        handlers.len() != before
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Deliver an event to every subscribed handler, in subscription order.
    pub fn emit(&self, event: DrawEvent) {
        trace!("dispatching {:?} to {} handler(s)", event, self.handler_count());
        for (_, handler) in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}
