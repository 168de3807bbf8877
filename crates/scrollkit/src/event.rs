//! Event listener binding
//!
//! [`bind_event`] registers a listener on any [`EventTarget`] and hands back a
//! [`Subscription`] that removes exactly that registration when unbound.
//! [`ListenerRegistry`] is an in-memory target with DOM listener semantics.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use scrollkit_core::Result;
use tracing::{debug, trace};

/// Shared event handler; identity (pointer equality) selects it on removal
pub type Listener = Rc<dyn Fn(&Event)>;

/// Wrap a closure as a [`Listener`]
pub fn listener(f: impl Fn(&Event) + 'static) -> Listener {
    Rc::new(f)
}

/// Recognized listener options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// Fire during the capture phase
    pub capture: bool,
    /// The listener promises not to call `prevent_default`
    pub passive: bool,
    /// Remove the listener after its first invocation
    pub once: bool,
}

impl ListenerOptions {
    pub fn capture(mut self) -> Self {
        self.capture = true;
        self
    }

    pub fn passive(mut self) -> Self {
        self.passive = true;
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

/// Something listeners can be attached to
pub trait EventTarget {
    fn add_listener(&self, event: &str, listener: &Listener, options: ListenerOptions)
        -> Result<()>;

    fn remove_listener(
        &self,
        event: &str,
        listener: &Listener,
        options: ListenerOptions,
    ) -> Result<()>;
}

/// An event delivered to listeners
#[derive(Debug)]
pub struct Event {
    kind: String,
    default_prevented: Cell<bool>,
    in_passive_listener: Cell<bool>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            default_prevented: Cell::new(false),
            in_passive_listener: Cell::new(false),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Ignored while a passive listener is running
    pub fn prevent_default(&self) {
        if !self.in_passive_listener.get() {
            self.default_prevented.set(true);
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// A live listener registration
///
/// Dropping a subscription leaves the listener registered; call
/// [`Subscription::unbind`] to remove it.
#[must_use = "dropping a Subscription does not remove the listener"]
pub struct Subscription<'a, T: EventTarget + ?Sized> {
    target: &'a T,
    event: String,
    listener: Listener,
    options: ListenerOptions,
}

impl<'a, T: EventTarget + ?Sized> Subscription<'a, T> {
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn options(&self) -> ListenerOptions {
        self.options
    }

    /// Remove the registration with the same options it was added with
    pub fn unbind(self) -> Result<()> {
        debug!("Unbinding '{}' listener", self.event);
        self.target
            .remove_listener(&self.event, &self.listener, self.options)
    }

    /// Turn the subscription into a zero-argument unsubscribe action
    pub fn into_fn(self) -> impl FnOnce() -> Result<()> + 'a {
        move || self.unbind()
    }
}

impl<T: EventTarget + ?Sized> fmt::Debug for Subscription<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Register `listener` for `event` on `target`
///
/// Errors from the target are returned as-is.
pub fn bind_event<'a, T: EventTarget + ?Sized>(
    target: &'a T,
    event: &str,
    listener: Listener,
    options: ListenerOptions,
) -> Result<Subscription<'a, T>> {
    target.add_listener(event, &listener, options)?;
    debug!(
        "Bound '{}' listener (capture: {}, passive: {}, once: {})",
        event, options.capture, options.passive, options.once
    );

    Ok(Subscription {
        target,
        event: event.to_string(),
        listener,
        options,
    })
}

struct Registration {
    /// Unique per add; a removed and re-added listener gets a new id
    id: u64,
    event: String,
    listener: Listener,
    options: ListenerOptions,
}

impl Registration {
    fn matches(&self, event: &str, listener: &Listener, capture: bool) -> bool {
        self.event == event
            && Rc::ptr_eq(&self.listener, listener)
            && self.options.capture == capture
    }
}

/// In-memory event target
///
/// A registration is identified by (event, listener, capture). Adding a
/// duplicate is a no-op, as is removing something that is not registered.
#[derive(Default)]
pub struct ListenerRegistry {
    registrations: RefCell<Vec<Registration>>,
    next_id: Cell<u64>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.event == event)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.borrow().is_empty()
    }

    fn contains(&self, event: &str, listener: &Listener, capture: bool) -> bool {
        self.registrations
            .borrow()
            .iter()
            .any(|r| r.matches(event, listener, capture))
    }

    fn is_live(&self, id: u64) -> bool {
        self.registrations.borrow().iter().any(|r| r.id == id)
    }

    fn remove(&self, event: &str, listener: &Listener, capture: bool) {
        self.registrations
            .borrow_mut()
            .retain(|r| !r.matches(event, listener, capture));
    }

    /// Invoke the listeners for `event`, capture listeners first
    ///
    /// Returns the number of listeners that ran. Listeners may add or remove
    /// registrations while running; one removed mid-dispatch does not fire,
    /// even if it is added again, and one added mid-dispatch waits for the
    /// next dispatch.
    pub fn dispatch(&self, event: &Event) -> usize {
        let mut pending: Vec<(u64, Listener, ListenerOptions)> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.event == event.kind())
            .map(|r| (r.id, Rc::clone(&r.listener), r.options))
            .collect();
        // Stable, so registration order holds within each phase
        pending.sort_by_key(|(_, _, options)| !options.capture);

        let mut invoked = 0;
        for (id, listener, options) in pending {
            if !self.is_live(id) {
                continue;
            }
            if options.once {
                self.registrations.borrow_mut().retain(|r| r.id != id);
            }

            event.in_passive_listener.set(options.passive);
            listener(event);
            event.in_passive_listener.set(false);
            invoked += 1;
        }

        trace!("Dispatched '{}' to {} listener(s)", event.kind(), invoked);
        invoked
    }
}

impl EventTarget for ListenerRegistry {
    fn add_listener(
        &self,
        event: &str,
        listener: &Listener,
        options: ListenerOptions,
    ) -> Result<()> {
        if !self.contains(event, listener, options.capture) {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.registrations.borrow_mut().push(Registration {
                id,
                event: event.to_string(),
                listener: Rc::clone(listener),
                options,
            });
        }
        Ok(())
    }

    fn remove_listener(
        &self,
        event: &str,
        listener: &Listener,
        options: ListenerOptions,
    ) -> Result<()> {
        self.remove(event, listener, options.capture);
        Ok(())
    }
}
