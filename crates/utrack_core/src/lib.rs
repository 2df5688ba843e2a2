//! Core domain logic for the utrack activity journal.
//! Owns the observable stores and every rule about what they accept.

pub mod clock;
pub mod config;
pub mod fixture;
pub mod listener;
pub mod logging;
pub mod model;
pub mod projection;
pub mod store;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, TrackerConfig};
pub use fixture::{fake_activity_names, generate_fake_data, DEFAULT_FAKE_DATA_POINTS};
pub use listener::{listener, EventKind, Listener, ListenerRegistry};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::activity::{
    ActivityCandidate, ActivityRecord, ActivityRef, HealthMetric, HealthMetrics,
    MetricsCandidate, RawValue, MAX_HEALTH_LEVEL, MIN_HEALTH_LEVEL,
};
pub use model::graph::{GraphName, UnknownGraphName};
pub use projection::health_metrics::{
    average_health_metrics, health_metrics_table, AverageHealthMetrics, HealthMetricsRow,
    MetricToggles,
};
pub use projection::last_entry::LastEntryTracker;
pub use projection::time_table::{time_table, TimeTableRow};
pub use projection::{graph_visibility, group_by_activity_type, ActivityGroup};
pub use store::activity_store::{activity_listener, ActivityListener, ActivityStore};
pub use store::graph_selector::{
    graph_listener, GraphListener, GraphSelector, SelectGraphOutcome,
};
pub use validation::{parse_integer, validate_candidate, ActivityValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
