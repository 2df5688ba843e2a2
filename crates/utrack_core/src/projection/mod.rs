//! Read-only projections rendered by the journal views.
//!
//! # Responsibility
//! - Aggregate store contents per activity type for the tables and the chart.
//! - Track view-facing state derived from store events (last entry, visible
//!   graph).
//!
//! # Invariants
//! - Projections never mutate a store; they read snapshots or listen.
//! - Groups appear in first-appearance order of their activity type.

pub mod health_metrics;
pub mod last_entry;
pub mod time_table;

use crate::model::activity::{ActivityRecord, ActivityRef};
use crate::model::graph::GraphName;
use std::collections::HashMap;

/// Records sharing one activity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGroup<'a> {
    pub activity_type: &'a str,
    pub records: Vec<&'a ActivityRecord>,
}

/// Groups records by activity type, keeping first-appearance order.
pub fn group_by_activity_type(records: &[ActivityRef]) -> Vec<ActivityGroup<'_>> {
    let mut index_by_type = HashMap::<&str, usize>::new();
    let mut groups = Vec::<ActivityGroup<'_>>::new();
    for record in records {
        let activity_type = record.activity_type();
        let index = *index_by_type.entry(activity_type).or_insert_with(|| {
            groups.push(ActivityGroup {
                activity_type,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].records.push(&**record);
    }
    groups
}

/// Which graph container is shown for `selected`; exactly one is `true`.
pub fn graph_visibility(selected: GraphName) -> [(GraphName, bool); 3] {
    GraphName::ALL.map(|graph| (graph, graph == selected))
}
