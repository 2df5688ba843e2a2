//! Observable in-memory stores.
//!
//! # Responsibility
//! - Own the journal entries and the current graph selection.
//! - Validate before mutating and notify listeners after every committed
//!   mutation.
//!
//! # Invariants
//! - Every store instance owns its own collection and listener list.
//! - Rejected or no-op calls never notify.
//! - Internal borrows are released before listeners run, so listeners may
//!   query or mutate the store that notified them.

pub mod activity_store;
pub mod graph_selector;
