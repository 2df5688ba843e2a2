//! Domain model for the activity journal.
//!
//! # Responsibility
//! - Define the validated activity record and its unvalidated input shape.
//! - Define the fixed set of selectable visualizations.
//!
//! # Invariants
//! - Stored records are always valid; invalid input never reaches a store.
//! - A graph selection is always one of `GraphName::ALL`.

pub mod activity;
pub mod graph;
