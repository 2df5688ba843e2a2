//! "Last data entry" tracker.

use crate::listener::EventKind;
use crate::model::activity::ActivityRef;
use crate::store::activity_store::{activity_listener, ActivityListener, ActivityStore};
use std::cell::Cell;
use std::rc::Rc;

/// Remembers when an entry was last added to an `ActivityStore`.
///
/// Removals do not count as entries.
pub struct LastEntryTracker {
    last_added_ms: Rc<Cell<Option<i64>>>,
    listener: ActivityListener,
}

impl LastEntryTracker {
    /// Subscribes a new tracker to `store`.
    pub fn attach(store: &ActivityStore) -> Self {
        let last_added_ms = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_added_ms);
        let listener = activity_listener(move |kind, timestamp_ms, _record: &ActivityRef| {
            if kind == EventKind::Added {
                sink.set(Some(timestamp_ms));
            }
        });
        store.add_listener(Rc::clone(&listener));
        Self {
            last_added_ms,
            listener,
        }
    }

    /// Epoch milliseconds of the latest `Added` event, if any.
    pub fn last_entry_epoch_ms(&self) -> Option<i64> {
        self.last_added_ms.get()
    }

    /// Unsubscribes from `store`. Returns `false` if it was not attached there.
    pub fn detach(&self, store: &ActivityStore) -> bool {
        store.remove_listener(&self.listener)
    }
}
