//! Fake journal data for demos and tests.
//!
//! # Responsibility
//! - Populate an `ActivityStore` with plausible random entries.
//!
//! # Invariants
//! - Generated entries go through `add_activity_data_point`, so validation
//!   and listener notification behave exactly as for user input.

use crate::model::activity::{
    ActivityCandidate, MetricsCandidate, MAX_HEALTH_LEVEL, MIN_HEALTH_LEVEL,
};
use crate::store::activity_store::ActivityStore;
use log::info;
use rand::Rng;

/// Entries generated when no count is given.
pub const DEFAULT_FAKE_DATA_POINTS: usize = 100;
const FAKE_ACTIVITY_KINDS: usize = 5;
const MAX_FAKE_DURATION_MINUTES: i64 = 60;

/// Names used for generated entries: `Activity 1` .. `Activity 5`.
pub fn fake_activity_names() -> Vec<String> {
    (1..=FAKE_ACTIVITY_KINDS)
        .map(|index| format!("Activity {index}"))
        .collect()
}

/// Adds `count` random entries (default 100) to `store`.
///
/// Returns how many entries the store accepted.
pub fn generate_fake_data<R: Rng>(
    store: &ActivityStore,
    count: Option<usize>,
    rng: &mut R,
) -> usize {
    let names = fake_activity_names();
    let count = count.unwrap_or(DEFAULT_FAKE_DATA_POINTS);

    let mut added = 0;
    for _ in 0..count {
        let activity_type = names[rng.gen_range(0..names.len())].clone();
        let metrics = MetricsCandidate::new(
            rng.gen_range(MIN_HEALTH_LEVEL..=MAX_HEALTH_LEVEL),
            rng.gen_range(MIN_HEALTH_LEVEL..=MAX_HEALTH_LEVEL),
            rng.gen_range(MIN_HEALTH_LEVEL..=MAX_HEALTH_LEVEL),
        );
        let duration_minutes = rng.gen_range(0..=MAX_FAKE_DURATION_MINUTES);
        let candidate = ActivityCandidate::new(activity_type, metrics, duration_minutes);
        if store.add_activity_data_point(candidate).is_ok() {
            added += 1;
        }
    }

    info!(
        "event=fixture_generate module=fixture status=ok requested={} added={}",
        count, added
    );
    added
}
