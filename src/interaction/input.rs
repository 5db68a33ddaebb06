//! Injected pointer input.
//!
//! A [`PointerDispatcher`] stands in for the document-level interaction
//! layer: handlers subscribe with a weak reference and receive every
//! down/move/up event. The returned [`Subscription`] unsubscribes when it is
//! dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Point;

/// Identifies the drawing surface (chart) a pointer event is over.
pub type SurfaceId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Body-level pointer event in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub point: Point,
    /// Surface under the pointer, if any.
    pub surface: Option<SurfaceId>,
    pub touch: bool,
    /// Whether the platform default (touch scroll, text selection) can be suppressed.
    pub cancelable: bool,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerEventKind, point: Point) -> Self {
        Self {
            kind,
            point,
            surface: None,
            touch: false,
            cancelable: true,
        }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    #[must_use]
    pub fn over(mut self, surface: SurfaceId) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    #[must_use]
    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    #[must_use]
    pub fn is_over(&self, surface: SurfaceId) -> bool {
        self.surface == Some(surface)
    }
}

/// Global mouse-cursor style requested by handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseCursorStyle {
    #[default]
    Default,
    Grabbing,
}

/// Side effects handlers request while processing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputEffects {
    pub prevent_default: bool,
    pub global_style: Option<MouseCursorStyle>,
}

impl InputEffects {
    /// Folds `other` into `self`; later style requests win.
    pub fn merge(&mut self, other: InputEffects) {
        self.prevent_default |= other.prevent_default;
        if other.global_style.is_some() {
            self.global_style = other.global_style;
        }
    }
}

/// Receiver of body-level pointer events.
pub trait PointerHandler {
    fn handle_pointer(&mut self, event: &PointerEvent, effects: &mut InputEffects);
}

/// Source of pointer events a cursor subscribes to.
pub trait InputSource {
    fn subscribe(&self, handler: Weak<RefCell<dyn PointerHandler>>) -> Subscription;
}

type HandlerEntry = (u64, Weak<RefCell<dyn PointerHandler>>);

#[derive(Default)]
struct HandlerTable {
    next_id: u64,
    handlers: Vec<HandlerEntry>,
}

/// In-process pointer event hub.
///
/// Cloning yields another handle to the same hub.
#[derive(Clone, Default)]
pub struct PointerDispatcher {
    table: Rc<RefCell<HandlerTable>>,
    global_style: Rc<Cell<MouseCursorStyle>>,
}

impl fmt::Debug for PointerDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerDispatcher")
            .field("subscribers", &self.subscriber_count())
            .field("global_style", &self.global_style.get())
            .finish()
    }
}

impl PointerDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every live subscriber in subscription order.
    pub fn dispatch(&self, event: &PointerEvent) -> InputEffects {
        let handlers: Vec<HandlerEntry> = {
            let mut table = self.table.borrow_mut();
            table
                .handlers
                .retain(|(_, handler)| handler.strong_count() > 0);
            table.handlers.clone()
        };

        let mut effects = InputEffects::default();
        for (id, handler) in handlers {
            let Some(handler) = handler.upgrade() else {
                continue;
            };
            match handler.try_borrow_mut() {
                Ok(mut handler) => handler.handle_pointer(event, &mut effects),
                Err(_) => warn!(subscription = id, "skipping re-entrant pointer handler"),
            }
        }

        if let Some(style) = effects.global_style {
            self.global_style.set(style);
        }
        effects
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.table
            .borrow()
            .handlers
            .iter()
            .filter(|(_, handler)| handler.strong_count() > 0)
            .count()
    }

    #[must_use]
    pub fn global_style(&self) -> MouseCursorStyle {
        self.global_style.get()
    }
}

impl InputSource for PointerDispatcher {
    fn subscribe(&self, handler: Weak<RefCell<dyn PointerHandler>>) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.handlers.push((id, handler));
        debug!(subscription = id, "pointer handler subscribed");
        Subscription {
            table: Rc::downgrade(&self.table),
            id,
            active: true,
        }
    }
}

/// Live registration on a [`PointerDispatcher`].
///
/// Dropping the subscription unregisters the handler.
pub struct Subscription {
    table: Weak<RefCell<HandlerTable>>,
    id: u64,
    active: bool,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl Subscription {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active && self.table.strong_count() > 0
    }

    /// Unregisters the handler now.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(table) = self.table.upgrade() {
            if let Ok(mut table) = table.try_borrow_mut() {
                table.handlers.retain(|(id, _)| *id != self.id);
            }
            debug!(subscription = self.id, "pointer handler unsubscribed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        seen: usize,
        prevent: bool,
    }

    impl PointerHandler for Counter {
        fn handle_pointer(&mut self, _event: &PointerEvent, effects: &mut InputEffects) {
            self.seen += 1;
            effects.prevent_default |= self.prevent;
        }
    }

    fn counter(prevent: bool) -> Rc<RefCell<Counter>> {
        Rc::new(RefCell::new(Counter {
            seen: 0,
            prevent,
        }))
    }

    fn subscribe(dispatcher: &PointerDispatcher, handler: &Rc<RefCell<Counter>>) -> Subscription {
        let handler: Rc<RefCell<dyn PointerHandler>> = handler.clone();
        dispatcher.subscribe(Rc::downgrade(&handler))
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let dispatcher = PointerDispatcher::new();
        let handler = counter(false);
        let subscription = subscribe(&dispatcher, &handler);
        dispatcher.dispatch(&PointerEvent::moved(1.0, 1.0));
        assert_eq!(handler.borrow().seen, 1);

        drop(subscription);
        assert_eq!(dispatcher.subscriber_count(), 0);
        dispatcher.dispatch(&PointerEvent::moved(2.0, 2.0));
        assert_eq!(handler.borrow().seen, 1);
    }

    #[test]
    fn dropped_handlers_are_pruned() {
        let dispatcher = PointerDispatcher::new();
        let handler = counter(false);
        let _subscription = subscribe(&dispatcher, &handler);
        drop(handler);
        assert_eq!(dispatcher.subscriber_count(), 0);
        let effects = dispatcher.dispatch(&PointerEvent::down(0.0, 0.0));
        assert_eq!(effects, InputEffects::default());
    }

    #[test]
    fn effects_are_merged_across_handlers() {
        let dispatcher = PointerDispatcher::new();
        let quiet = counter(false);
        let loud = counter(true);
        let _a = subscribe(&dispatcher, &quiet);
        let _b = subscribe(&dispatcher, &loud);
        let effects = dispatcher.dispatch(&PointerEvent::down(0.0, 0.0));
        assert!(effects.prevent_default);
        assert_eq!(quiet.borrow().seen, 1);
        assert_eq!(loud.borrow().seen, 1);
    }

    #[test]
    fn subscription_outliving_dispatcher_is_inactive() {
        let dispatcher = PointerDispatcher::new();
        let handler = counter(false);
        let subscription = subscribe(&dispatcher, &handler);
        assert!(subscription.is_active());
        drop(dispatcher);
        assert!(!subscription.is_active());
    }
}
