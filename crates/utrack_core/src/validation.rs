//! Activity validation rules.
//!
//! # Responsibility
//! - Turn an `ActivityCandidate` into a valid `ActivityRecord` or a single,
//!   specific rejection reason.
//! - Provide the integer parsing used for loosely typed form input.
//!
//! # Invariants
//! - Rules run in a fixed order and stop at the first failure:
//!   activity type, metrics presence, energy, stress, happiness, duration.
//! - Every rule has its own diagnostic and reason code.
//! - Validation is pure: no logging, no state.

use crate::model::activity::{
    ActivityCandidate, ActivityRecord, HealthMetric, HealthMetrics, MetricsCandidate, RawValue,
    MAX_HEALTH_LEVEL, MIN_HEALTH_LEVEL,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static LEADING_INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

/// Reason an activity candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityValidationError {
    /// `activity_type` is missing or empty.
    EmptyActivityType,
    /// Health metrics block is missing.
    MissingMetrics,
    /// Metric value is missing or does not parse to an integer.
    MetricNotInteger(HealthMetric),
    /// Metric parsed to an integer outside `1..=5`.
    MetricOutOfRange { metric: HealthMetric, value: i64 },
    /// Duration is missing or does not parse to an integer.
    DurationNotInteger,
    /// Duration parsed to a negative integer.
    NegativeDuration(i64),
}

impl ActivityValidationError {
    /// Stable machine-readable code used in log lines and tests.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::EmptyActivityType => "empty_activity_type",
            Self::MissingMetrics => "missing_metrics",
            Self::MetricNotInteger(HealthMetric::Energy) => "energy_level_not_integer",
            Self::MetricNotInteger(HealthMetric::Stress) => "stress_level_not_integer",
            Self::MetricNotInteger(HealthMetric::Happiness) => "happiness_level_not_integer",
            Self::MetricOutOfRange {
                metric: HealthMetric::Energy,
                ..
            } => "energy_level_out_of_range",
            Self::MetricOutOfRange {
                metric: HealthMetric::Stress,
                ..
            } => "stress_level_out_of_range",
            Self::MetricOutOfRange {
                metric: HealthMetric::Happiness,
                ..
            } => "happiness_level_out_of_range",
            Self::DurationNotInteger => "duration_not_integer",
            Self::NegativeDuration(_) => "negative_duration",
        }
    }
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyActivityType => write!(f, "activity type must not be empty"),
            Self::MissingMetrics => write!(f, "health metrics are missing"),
            Self::MetricNotInteger(metric) => write!(f, "{} must be an integer", metric.label()),
            Self::MetricOutOfRange { metric, value } => write!(
                f,
                "{} must be between {MIN_HEALTH_LEVEL} and {MAX_HEALTH_LEVEL}, got {value}",
                metric.label()
            ),
            Self::DurationNotInteger => write!(f, "duration must be an integer"),
            Self::NegativeDuration(value) => write!(f, "duration must be >= 0, got {value}"),
        }
    }
}

impl Error for ActivityValidationError {}

/// Validates a candidate and builds the stored record shape.
///
/// # Errors
/// Returns the first failing rule, in the documented order.
pub fn validate_candidate(
    candidate: &ActivityCandidate,
) -> Result<ActivityRecord, ActivityValidationError> {
    let activity_type = check_activity_type(candidate.activity_type.as_deref())?;
    let metrics = candidate
        .metrics
        .as_ref()
        .ok_or(ActivityValidationError::MissingMetrics)?;
    let metrics = validate_metrics(metrics)?;
    let duration_minutes = check_duration(candidate.duration_minutes.as_ref())?;

    Ok(ActivityRecord::from_checked(
        activity_type.to_string(),
        metrics,
        duration_minutes,
    ))
}

/// Validates the metrics block alone (energy, stress, happiness in order).
pub fn validate_metrics(
    metrics: &MetricsCandidate,
) -> Result<HealthMetrics, ActivityValidationError> {
    let mut levels = [0_u8; 3];
    for (slot, metric) in levels.iter_mut().zip(HealthMetric::ALL) {
        let value = metrics
            .get(metric)
            .and_then(parse_integer)
            .ok_or(ActivityValidationError::MetricNotInteger(metric))?;
        *slot = check_level(metric, value)?;
    }
    let [energy, stress, happiness] = levels;
    Ok(HealthMetrics::from_checked(energy, stress, happiness))
}

/// Parses a loosely typed value the way browser form input is read.
///
/// - Integers pass through.
/// - Finite floats truncate toward zero.
/// - Text yields its leading signed digit run (`" 4 stars"` -> 4),
///   saturating at the `i64` bounds.
/// - Everything else is not an integer.
pub fn parse_integer(value: &RawValue) -> Option<i64> {
    match value {
        RawValue::Integer(value) => Some(*value),
        RawValue::Float(value) if value.is_finite() => Some(value.trunc() as i64),
        RawValue::Float(_) => None,
        RawValue::Text(text) => {
            let digits = LEADING_INTEGER_RE.captures(text)?.get(1)?.as_str();
            // The regex admits only a sign and digits, so parsing fails on
            // overflow alone.
            Some(digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }))
        }
    }
}

pub(crate) fn check_activity_type(
    activity_type: Option<&str>,
) -> Result<&str, ActivityValidationError> {
    match activity_type {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ActivityValidationError::EmptyActivityType),
    }
}

pub(crate) fn check_level(metric: HealthMetric, value: i64) -> Result<u8, ActivityValidationError> {
    if !(MIN_HEALTH_LEVEL..=MAX_HEALTH_LEVEL).contains(&value) {
        return Err(ActivityValidationError::MetricOutOfRange { metric, value });
    }
    u8::try_from(value).map_err(|_| ActivityValidationError::MetricOutOfRange { metric, value })
}

fn check_duration(value: Option<&RawValue>) -> Result<u64, ActivityValidationError> {
    let minutes = value
        .and_then(parse_integer)
        .ok_or(ActivityValidationError::DurationNotInteger)?;
    u64::try_from(minutes).map_err(|_| ActivityValidationError::NegativeDuration(minutes))
}
