//! Single-threaded publish/subscribe used to push state changes to the
//! presentation layer.
//!
//! Listeners run synchronously, in subscription order, on the thread that
//! emitted. Subscribing or unsubscribing from inside a listener is allowed;
//! the change takes effect from the next `emit`. An event emitted from inside
//! a listener is queued and delivered to every listener once the current
//! event has reached all of them.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Listener<E> = Box<dyn FnMut(&E)>;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct BusInner<E> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    emitting: bool,
    removed: Vec<SubscriptionId>,
    pending: VecDeque<E>,
}

/// Cloneable handle to a shared listener list.
pub struct EventBus<E> {
    inner: Rc<RefCell<BusInner<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                next_id: 0,
                listeners: Vec::new(),
                emitting: false,
                removed: Vec::new(),
                pending: VecDeque::new(),
            })),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        if inner.listeners.len() != before {
            return true;
        }
        // Listener may be checked out by an in-flight emit.
        if inner.emitting && id.0 < inner.next_id && !inner.removed.contains(&id) {
            inner.removed.push(id);
            return true;
        }
        false
    }

    /// Deliver `event` to every listener. Called from inside a listener, the
    /// event is queued behind the one in flight.
    pub fn emit(&self, event: &E)
    where
        E: Clone,
    {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.emitting {
                inner.pending.push_back(event.clone());
                return;
            }
        }

        self.deliver(event);
        loop {
            let next = self.inner.borrow_mut().pending.pop_front();
            match next {
                Some(queued) => self.deliver(&queued),
                None => break,
            }
        }
    }

    fn deliver(&self, event: &E) {
        let mut active = {
            let mut inner = self.inner.borrow_mut();
            inner.emitting = true;
            std::mem::take(&mut inner.listeners)
        };

        for (id, listener) in active.iter_mut() {
            if self.inner.borrow().removed.contains(id) {
                continue;
            }
            listener(event);
        }

        let mut inner = self.inner.borrow_mut();
        inner.emitting = false;
        let added = std::mem::take(&mut inner.listeners);
        let removed = std::mem::take(&mut inner.removed);
        active.retain(|(id, _)| !removed.contains(id));
        active.extend(added);
        inner.listeners = active;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn listeners_run_in_subscription_order() {
        let bus = EventBus::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |n| seen.borrow_mut().push(format!("{tag}{n}")));
        }
        bus.emit(&1);
        bus.emit(&2);
        assert_eq!(*seen.borrow(), vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = bus.subscribe(move |_| counter.set(counter.get() + 1));
        bus.emit(&());
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(&());
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn subscribe_during_emit_applies_next_time() {
        let bus = EventBus::<()>::new();
        let late_hits = Rc::new(Cell::new(0));
        let handle = bus.clone();
        let late = Rc::clone(&late_hits);
        let armed = Cell::new(false);
        bus.subscribe(move |_| {
            if !armed.replace(true) {
                let late = Rc::clone(&late);
                handle.subscribe(move |_| late.set(late.get() + 1));
            }
        });

        bus.emit(&());
        assert_eq!(late_hits.get(), 0);
        bus.emit(&());
        assert_eq!(late_hits.get(), 1);
        assert_eq!(bus.listener_count(), 2);
    }

    #[test]
    fn listener_can_unsubscribe_itself() {
        let bus = EventBus::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let handle = bus.clone();
        let counter = Rc::clone(&hits);
        let own_id = Rc::clone(&slot);
        let id = bus.subscribe(move |_| {
            counter.set(counter.get() + 1);
            if let Some(id) = own_id.get() {
                handle.unsubscribe(id);
            }
        });
        slot.set(Some(id));

        bus.emit(&());
        bus.emit(&());
        assert_eq!(hits.get(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn event_emitted_by_a_listener_reaches_everyone_in_order() {
        let bus = EventBus::<u32>::new();
        let forwarder_seen = Rc::new(RefCell::new(Vec::new()));
        let recorder_seen = Rc::new(RefCell::new(Vec::new()));

        let handle = bus.clone();
        let seen = Rc::clone(&forwarder_seen);
        bus.subscribe(move |n| {
            seen.borrow_mut().push(*n);
            if *n == 1 {
                handle.emit(&2);
            }
        });
        let seen = Rc::clone(&recorder_seen);
        bus.subscribe(move |n| seen.borrow_mut().push(*n));

        bus.emit(&1);
        assert_eq!(*forwarder_seen.borrow(), vec![1, 2]);
        assert_eq!(*recorder_seen.borrow(), vec![1, 2]);
        assert_eq!(bus.listener_count(), 2);

        bus.emit(&3);
        assert_eq!(*recorder_seen.borrow(), vec![1, 2, 3]);
    }
}
