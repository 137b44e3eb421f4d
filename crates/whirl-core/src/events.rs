//! Typed publish/subscribe event bus.
//!
//! Subscribers register per event kind (a small closed enum on the caller's
//! side) and receive events synchronously, in subscription order. The
//! handler list is snapshotted before dispatch, so a handler may
//! unsubscribe itself or any other handler mid-dispatch: the snapshot for
//! the current emission still runs to completion, and the removal takes
//! effect from the next emission on.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::hash::Hash;
use std::rc::Rc;

/// Opaque handle returned by [`EventBus::subscribe`]; pass it back to
/// [`EventBus::unsubscribe`] to remove the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

struct Entry<E> {
    id: u64,
    handler: Rc<dyn Fn(&E)>,
}

impl<E> Clone for Entry<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            handler: Rc::clone(&self.handler),
        }
    }
}

/// Per-kind subscriber registry with synchronous, ordered dispatch.
///
/// Single-threaded by design; all mutation happens inside pointer handlers
/// or frame ticks, never concurrently.
pub struct EventBus<K, E> {
    subscribers: RefCell<FxHashMap<K, SmallVec<[Entry<E>; 2]>>>,
    next_id: Cell<u64>,
}

impl<K: Copy + Eq + Hash, E> EventBus<K, E> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(FxHashMap::default()),
            next_id: Cell::new(1),
        }
    }

    /// Register `handler` for events of `kind`. Handlers for the same kind
    /// run in the order they subscribed.
    pub fn subscribe(&self, kind: K, handler: impl Fn(&E) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Entry {
                id,
                handler: Rc::new(handler),
            });
        log::trace!("subscriber {id} registered");
        Subscription { id }
    }

    /// Remove a previously registered handler. Unknown or already removed
    /// subscriptions are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut map = self.subscribers.borrow_mut();
        for entries in map.values_mut() {
            entries.retain(|entry| entry.id != subscription.id);
        }
    }

    /// Dispatch `event` to every handler registered for `kind`.
    pub fn emit(&self, kind: K, event: &E) {
        // Snapshot outside the borrow so handlers can (un)subscribe freely.
        let snapshot: SmallVec<[Entry<E>; 2]> = match self.subscribers.borrow().get(&kind) {
            Some(entries) => entries.clone(),
            None => return,
        };
        for entry in &snapshot {
            (entry.handler)(event);
        }
    }

    /// Drop every handler. Used on teardown.
    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().values().map(|v| v.len()).sum()
    }
}

impl<K: Copy + Eq + Hash, E> Default for EventBus<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        A,
        B,
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let bus: EventBus<Kind, u32> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in 0..3 {
            let seen = Rc::clone(&seen);
            bus.subscribe(Kind::A, move |value| {
                seen.borrow_mut().push((tag, *value));
            });
        }

        bus.emit(Kind::A, &7);
        assert_eq!(*seen.borrow(), vec![(0, 7), (1, 7), (2, 7)]);
    }

    #[test]
    fn kinds_are_isolated() {
        let bus: EventBus<Kind, u32> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let count_in = Rc::clone(&count);
        bus.subscribe(Kind::A, move |_| count_in.set(count_in.get() + 1));

        bus.emit(Kind::B, &0);
        assert_eq!(count.get(), 0);
        bus.emit(Kind::A, &0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus: EventBus<Kind, u32> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let count_in = Rc::clone(&count);
        let sub = bus.subscribe(Kind::A, move |_| count_in.set(count_in.get() + 1));

        bus.emit(Kind::A, &0);
        bus.unsubscribe(sub);
        bus.emit(Kind::A, &0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_during_dispatch_still_delivers_current_emission() {
        let bus: Rc<EventBus<Kind, u32>> = Rc::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        // First handler removes the second while the snapshot is running.
        let removed: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        {
            let bus = Rc::clone(&bus);
            let removed = Rc::clone(&removed);
            let seen = Rc::clone(&seen);
            bus.clone().subscribe(Kind::A, move |_| {
                seen.borrow_mut().push("first");
                if let Some(sub) = removed.borrow_mut().take() {
                    bus.unsubscribe(sub);
                }
            });
        }
        let second = {
            let seen = Rc::clone(&seen);
            bus.subscribe(Kind::A, move |_| seen.borrow_mut().push("second"))
        };
        *removed.borrow_mut() = Some(second);

        bus.emit(Kind::A, &0);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);

        bus.emit(Kind::A, &0);
        assert_eq!(*seen.borrow(), vec!["first", "second", "first"]);
    }

    #[test]
    fn clear_removes_everything() {
        let bus: EventBus<Kind, u32> = EventBus::new();
        bus.subscribe(Kind::A, |_| {});
        bus.subscribe(Kind::B, |_| {});
        assert_eq!(bus.subscriber_count(), 2);
        bus.clear();
        assert_eq!(bus.subscriber_count(), 0);
    }
}
