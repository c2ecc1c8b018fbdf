//! Global input fan-out with scoped subscriptions
//!
//! Pointer and viewport events are broadcast to every mounted component.
//! Components register through [`InputHub::subscribe`] and stay registered
//! for exactly as long as the returned [`Subscription`] lives, so unmounting
//! a component (even mid-gesture) always removes its listener.
//!
//! Dispatch rules:
//! - `PointerDown` is offered to listeners in subscription order and stops at
//!   the first one that claims it.
//! - Every other event reaches every listener.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use crate::model::handle::HandleId;
use crate::model::vector::Vec2;

/// A global input event as seen by geometry components
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed; `origin` is the zone under the pointer, if any
    PointerDown {
        origin: Option<HandleId>,
        pointer: Vec2,
    },
    /// Pointer moved anywhere in the window
    PointerMove { pointer: Vec2 },
    /// Primary button released
    PointerUp,
    /// Window inner size changed
    ViewportResized { viewport: Vec2 },
}

/// Outcome of delivering an event to a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The listener reacted to the event
    Consumed {
        /// Whether its visible state changed
        redraw: bool,
    },
    /// The event was not for this listener
    Bubble,
}

impl EventResult {
    pub fn consumed_redraw() -> Self {
        Self::Consumed { redraw: true }
    }

    pub fn consumed_no_redraw() -> Self {
        Self::Consumed { redraw: false }
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }

    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Consumed { redraw: true })
    }

    /// Combine two results from a fan-out
    fn merge(self, other: EventResult) -> EventResult {
        match (self, other) {
            (Self::Bubble, r) | (r, Self::Bubble) => r,
            (Self::Consumed { redraw: a }, Self::Consumed { redraw: b }) => {
                Self::Consumed { redraw: a || b }
            }
        }
    }
}

/// Something that reacts to global input events
pub trait InputListener {
    /// Handle one event. `viewport` is the window size at dispatch time.
    fn handle(&mut self, event: &InputEvent, viewport: Vec2) -> EventResult;
}

type SharedListener = Rc<RefCell<dyn InputListener>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubscriptionId(u64);

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(SubscriptionId, SharedListener)>,
}

/// Broadcasts input events to all live subscriptions
#[derive(Default, Clone)]
pub struct InputHub {
    inner: Rc<RefCell<HubInner>>,
}

impl std::fmt::Debug for InputHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHub")
            .field("listeners", &self.len())
            .finish()
    }
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is removed when the returned guard is dropped.
    pub fn subscribe<L: InputListener + 'static>(&self, listener: Rc<RefCell<L>>) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener as SharedListener));
        tracing::debug!(subscription = id.0, "input listener subscribed");

        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver an event according to the dispatch rules in the module docs
    pub fn dispatch(&self, event: &InputEvent, viewport: Vec2) -> EventResult {
        // Snapshot so listeners never observe the hub mid-borrow
        let listeners: Vec<SharedListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        let first_claim_wins = matches!(event, InputEvent::PointerDown { .. });
        let mut result = EventResult::Bubble;

        for listener in listeners {
            let outcome = listener.borrow_mut().handle(event, viewport);
            result = result.merge(outcome);
            if first_claim_wins && outcome.is_consumed() {
                break;
            }
        }

        result
    }
}

/// Keeps a listener registered; dropping it deregisters the listener
#[must_use = "dropping a Subscription immediately deregisters the listener"]
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    hub: Weak<RefCell<HubInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(subscription = self.id.0, "input listener unsubscribed");
        }
    }
}

/// A component's shared state together with its hub registration
#[derive(Debug)]
pub struct Mounted<T> {
    state: Rc<RefCell<T>>,
    _subscription: Subscription,
}

impl<T: InputListener + 'static> Mounted<T> {
    /// Wrap `component` and subscribe it to `hub`
    pub fn mount(hub: &InputHub, component: T) -> Self {
        let state = Rc::new(RefCell::new(component));
        let subscription = hub.subscribe(Rc::clone(&state));
        Self {
            state,
            _subscription: subscription,
        }
    }
}

impl<T> Mounted<T> {
    pub fn borrow(&self) -> Ref<'_, T> {
        self.state.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.state.borrow_mut()
    }
}
