//! Listener registry shared by the observable stores.
//!
//! # Responsibility
//! - Keep an ordered list of subscriber callbacks per store instance.
//! - Fan events out synchronously in subscription order.
//!
//! # Invariants
//! - Duplicates are allowed; removal drops the first identity match only.
//! - Each notification pass runs against a snapshot taken when the pass
//!   starts. Subscribing or unsubscribing from inside a callback affects the
//!   next pass, not the current one.
//! - Registries are per instance; nothing is shared between stores.

use serde::Serialize;
use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

/// Kind of change a store reports to its listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    /// A record was appended to an `ActivityStore`.
    #[serde(rename = "ACTIVITY_DATA_ADDED_EVENT")]
    Added,
    /// A record was removed from an `ActivityStore`.
    #[serde(rename = "ACTIVITY_DATA_REMOVED_EVENT")]
    Removed,
    /// A `GraphSelector` switched to another graph.
    #[serde(rename = "GRAPH_SELECTED_EVENT")]
    Selected,
}

impl EventKind {
    /// Stable wire name of this event.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "ACTIVITY_DATA_ADDED_EVENT",
            Self::Removed => "ACTIVITY_DATA_REMOVED_EVENT",
            Self::Selected => "GRAPH_SELECTED_EVENT",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscriber callback: `(kind, timestamp_ms, payload)`.
///
/// Identity is the `Rc` allocation; keep a clone of the handle to
/// unsubscribe later.
pub type Listener<P> = Rc<dyn Fn(EventKind, i64, &P)>;

/// Wraps a closure into a `Listener` handle.
pub fn listener<P, F>(callback: F) -> Listener<P>
where
    P: 'static,
    F: Fn(EventKind, i64, &P) + 'static,
{
    Rc::new(callback)
}

/// Ordered, identity-keyed list of listeners.
pub struct ListenerRegistry<P> {
    listeners: RefCell<Vec<Listener<P>>>,
}

impl<P> ListenerRegistry<P> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Appends a listener. The same handle may be added more than once.
    pub fn add(&self, listener: Listener<P>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Removes the first registration of `listener`.
    ///
    /// Returns `false` when the handle is not registered.
    pub fn remove(&self, listener: &Listener<P>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners
            .iter()
            .position(|registered| Rc::ptr_eq(registered, listener))
        {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Invokes every listener registered when the call starts, in order.
    ///
    /// Returns how many callbacks ran.
    pub fn notify(&self, kind: EventKind, timestamp_ms: i64, payload: &P) -> usize {
        let snapshot = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener(kind, timestamp_ms, payload);
        }
        snapshot.len()
    }
}

impl<P> Default for ListenerRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Debug for ListenerRegistry<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{listener, EventKind, Listener, ListenerRegistry};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tagging(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Listener<u32> {
        let log = Rc::clone(log);
        listener(move |_kind: EventKind, _ts: i64, _payload: &u32| log.borrow_mut().push(tag))
    }

    #[test]
    fn notifies_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = ListenerRegistry::new();
        registry.add(tagging(&log, "first"));
        registry.add(tagging(&log, "second"));
        registry.add(tagging(&log, "third"));

        assert_eq!(registry.notify(EventKind::Added, 1, &7), 3);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn remove_drops_first_identity_match_only() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = ListenerRegistry::new();
        let twice = tagging(&log, "twice");
        registry.add(Rc::clone(&twice));
        registry.add(tagging(&log, "other"));
        registry.add(Rc::clone(&twice));

        assert!(registry.remove(&twice));
        assert_eq!(registry.len(), 2);
        registry.notify(EventKind::Removed, 1, &0);
        assert_eq!(*log.borrow(), vec!["other", "twice"]);
    }

    #[test]
    fn remove_unknown_listener_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = ListenerRegistry::new();
        registry.add(tagging(&log, "kept"));

        assert!(!registry.remove(&tagging(&log, "look-alike")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn subscription_during_notify_applies_to_next_pass() {
        let registry = Rc::new(ListenerRegistry::<u32>::new());
        let calls = Rc::new(RefCell::new(0_usize));

        let late_calls = Rc::clone(&calls);
        let late = listener(move |_kind: EventKind, _ts: i64, _payload: &u32| {
            *late_calls.borrow_mut() += 1;
        });
        let registry_handle = Rc::downgrade(&registry);
        registry.add(listener(move |_kind: EventKind, _ts: i64, _payload: &u32| {
            if let Some(registry) = registry_handle.upgrade() {
                registry.add(Rc::clone(&late));
            }
        }));

        assert_eq!(registry.notify(EventKind::Selected, 1, &0), 1);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(registry.len(), 2);

        registry.notify(EventKind::Selected, 2, &0);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn event_kinds_use_stable_wire_names() {
        assert_eq!(EventKind::Added.to_string(), "ACTIVITY_DATA_ADDED_EVENT");
        assert_eq!(EventKind::Removed.as_str(), "ACTIVITY_DATA_REMOVED_EVENT");
        assert_eq!(EventKind::Selected.as_str(), "GRAPH_SELECTED_EVENT");
    }
}
