//! Observable store of activity records.

use crate::clock::{Clock, SystemClock};
use crate::listener::{EventKind, Listener, ListenerRegistry};
use crate::model::activity::{ActivityCandidate, ActivityRef};
use crate::validation::{validate_candidate, ActivityValidationError};
use log::{debug, warn};
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Listener signature for `ActivityStore` events (`Added` / `Removed`).
pub type ActivityListener = Listener<ActivityRef>;

/// Wraps a closure into an `ActivityListener`.
pub fn activity_listener<F>(callback: F) -> ActivityListener
where
    F: Fn(EventKind, i64, &ActivityRef) + 'static,
{
    Rc::new(callback)
}

/// Insertion-ordered collection of validated activity records.
///
/// Identical content may be stored several times; entries are told apart by
/// handle identity only.
pub struct ActivityStore {
    records: RefCell<Vec<ActivityRef>>,
    listeners: ListenerRegistry<ActivityRef>,
    clock: Rc<dyn Clock>,
}

impl ActivityStore {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    /// Creates an empty store stamped by `clock`.
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            listeners: ListenerRegistry::new(),
            clock,
        }
    }

    pub fn add_listener(&self, listener: ActivityListener) {
        self.listeners.add(listener);
    }

    /// Unsubscribes the first registration of `listener`.
    pub fn remove_listener(&self, listener: &ActivityListener) -> bool {
        self.listeners.remove(listener)
    }

    /// Validates and appends one entry, then notifies `Added`.
    ///
    /// # Contract
    /// - On success the returned handle is the stored entry and the payload
    ///   every listener received.
    /// - On rejection nothing is stored and no listener runs.
    ///
    /// # Errors
    /// Returns the first failing validation rule.
    pub fn add_activity_data_point(
        &self,
        candidate: impl Into<ActivityCandidate>,
    ) -> Result<ActivityRef, ActivityValidationError> {
        let candidate = candidate.into();
        let record = match validate_candidate(&candidate) {
            Ok(record) => Rc::new(record),
            Err(err) => {
                warn!(
                    "event=activity_add module=store status=rejected reason={}",
                    err.reason_code()
                );
                return Err(err);
            }
        };

        self.records.borrow_mut().push(Rc::clone(&record));
        let timestamp_ms = self.clock.now_epoch_ms();
        let notified = self
            .listeners
            .notify(EventKind::Added, timestamp_ms, &record);
        debug!(
            "event=activity_add module=store status=ok listeners={} size={}",
            notified,
            self.len()
        );
        Ok(record)
    }

    /// Removes the entry identical to `record`, then notifies `Removed`.
    ///
    /// Returns `false` without notifying when the entry is not stored. A
    /// different handle with equal content does not match.
    pub fn remove_activity_data_point(&self, record: &ActivityRef) -> bool {
        let removed = {
            let mut records = self.records.borrow_mut();
            let index = records
                .iter()
                .position(|stored| Rc::ptr_eq(stored, record));
            index.map(|index| records.remove(index))
        };
        let Some(removed) = removed else {
            debug!("event=activity_remove module=store status=not_found");
            return false;
        };

        let timestamp_ms = self.clock.now_epoch_ms();
        let notified = self
            .listeners
            .notify(EventKind::Removed, timestamp_ms, &removed);
        debug!(
            "event=activity_remove module=store status=ok listeners={} size={}",
            notified,
            self.len()
        );
        true
    }

    /// Returns the stored entries in insertion order.
    ///
    /// The vector is a snapshot; changing it does not change the store.
    pub fn get_activity_data_points(&self) -> Vec<ActivityRef> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ActivityStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityStore")
            .field("records", &self.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}
