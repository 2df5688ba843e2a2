//! Activity domain model.
//!
//! # Responsibility
//! - Define the fixed-shape record held by `ActivityStore`.
//! - Define the unvalidated candidate shape delivered by forms, JSON and
//!   fixtures.
//!
//! # Invariants
//! - An `ActivityRecord` value is always valid: fields are private and every
//!   constructor runs the validation rules.
//! - Store identity is handle identity (`Rc::ptr_eq` on `ActivityRef`), never
//!   value equality.
//!
//! # See also
//! - `crate::validation`

use crate::validation::{self, ActivityValidationError};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Lowest accepted score for every health metric.
pub const MIN_HEALTH_LEVEL: i64 = 1;
/// Highest accepted score for every health metric.
pub const MAX_HEALTH_LEVEL: i64 = 5;

/// Shared handle to one stored record.
///
/// Two handles refer to the same stored entry only when `Rc::ptr_eq` holds.
pub type ActivityRef = Rc<ActivityRecord>;

/// One of the three subjective health scores attached to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthMetric {
    Energy,
    Stress,
    Happiness,
}

impl HealthMetric {
    /// Metrics in validation (and display) order.
    pub const ALL: [HealthMetric; 3] = [Self::Energy, Self::Stress, Self::Happiness];

    /// Field name used in serialized records.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Energy => "energy_level",
            Self::Stress => "stress_level",
            Self::Happiness => "happiness_level",
        }
    }

    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Energy => "energy level",
            Self::Stress => "stress level",
            Self::Happiness => "happiness level",
        }
    }
}

/// Validated health scores, each in `MIN_HEALTH_LEVEL..=MAX_HEALTH_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MetricsCandidate")]
pub struct HealthMetrics {
    energy_level: u8,
    stress_level: u8,
    happiness_level: u8,
}

impl HealthMetrics {
    /// Creates metrics after range-checking every score.
    ///
    /// # Errors
    /// - `MetricOutOfRange` for the first score (energy, stress, happiness)
    ///   outside `1..=5`.
    pub fn new(
        energy_level: i64,
        stress_level: i64,
        happiness_level: i64,
    ) -> Result<Self, ActivityValidationError> {
        Ok(Self {
            energy_level: validation::check_level(HealthMetric::Energy, energy_level)?,
            stress_level: validation::check_level(HealthMetric::Stress, stress_level)?,
            happiness_level: validation::check_level(HealthMetric::Happiness, happiness_level)?,
        })
    }

    pub(crate) fn from_checked(energy_level: u8, stress_level: u8, happiness_level: u8) -> Self {
        Self {
            energy_level,
            stress_level,
            happiness_level,
        }
    }

    pub fn energy_level(&self) -> u8 {
        self.energy_level
    }

    pub fn stress_level(&self) -> u8 {
        self.stress_level
    }

    pub fn happiness_level(&self) -> u8 {
        self.happiness_level
    }

    /// Returns the score for one metric.
    pub fn get(&self, metric: HealthMetric) -> u8 {
        match metric {
            HealthMetric::Energy => self.energy_level,
            HealthMetric::Stress => self.stress_level,
            HealthMetric::Happiness => self.happiness_level,
        }
    }
}

impl TryFrom<MetricsCandidate> for HealthMetrics {
    type Error = ActivityValidationError;

    fn try_from(value: MetricsCandidate) -> Result<Self, Self::Error> {
        validation::validate_metrics(&value)
    }
}

/// Validated activity entry.
///
/// Immutable once constructed. Stores hand it out as `ActivityRef`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ActivityCandidate")]
pub struct ActivityRecord {
    activity_type: String,
    metrics: HealthMetrics,
    duration_minutes: u64,
}

impl ActivityRecord {
    /// Creates a record from already-typed parts.
    ///
    /// # Errors
    /// - `EmptyActivityType` when `activity_type` is empty.
    pub fn new(
        activity_type: impl Into<String>,
        metrics: HealthMetrics,
        duration_minutes: u64,
    ) -> Result<Self, ActivityValidationError> {
        let activity_type = activity_type.into();
        validation::check_activity_type(Some(activity_type.as_str()))?;
        Ok(Self::from_checked(activity_type, metrics, duration_minutes))
    }

    pub(crate) fn from_checked(
        activity_type: String,
        metrics: HealthMetrics,
        duration_minutes: u64,
    ) -> Self {
        Self {
            activity_type,
            metrics,
            duration_minutes,
        }
    }

    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    pub fn metrics(&self) -> &HealthMetrics {
        &self.metrics
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }
}

impl TryFrom<ActivityCandidate> for ActivityRecord {
    type Error = ActivityValidationError;

    fn try_from(value: ActivityCandidate) -> Result<Self, Self::Error> {
        validation::validate_candidate(&value)
    }
}

/// Loosely typed scalar as delivered by a form field or a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for RawValue {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Integer(value),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unvalidated health scores.
///
/// Accepts both snake_case and the camelCase names used by browser forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsCandidate {
    #[serde(alias = "energyLevel")]
    pub energy_level: Option<RawValue>,
    #[serde(alias = "stressLevel")]
    pub stress_level: Option<RawValue>,
    #[serde(alias = "happinessLevel")]
    pub happiness_level: Option<RawValue>,
}

impl MetricsCandidate {
    pub fn new(
        energy_level: impl Into<RawValue>,
        stress_level: impl Into<RawValue>,
        happiness_level: impl Into<RawValue>,
    ) -> Self {
        Self {
            energy_level: Some(energy_level.into()),
            stress_level: Some(stress_level.into()),
            happiness_level: Some(happiness_level.into()),
        }
    }

    /// Returns the raw input for one metric.
    pub fn get(&self, metric: HealthMetric) -> Option<&RawValue> {
        match metric {
            HealthMetric::Energy => self.energy_level.as_ref(),
            HealthMetric::Stress => self.stress_level.as_ref(),
            HealthMetric::Happiness => self.happiness_level.as_ref(),
        }
    }
}

impl From<HealthMetrics> for MetricsCandidate {
    fn from(value: HealthMetrics) -> Self {
        Self::new(
            value.energy_level,
            value.stress_level,
            value.happiness_level,
        )
    }
}

/// Unvalidated activity entry submitted to `ActivityStore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCandidate {
    #[serde(alias = "activityType")]
    pub activity_type: Option<String>,
    #[serde(alias = "activityDataDict")]
    pub metrics: Option<MetricsCandidate>,
    #[serde(alias = "activityDurationInMinutes")]
    pub duration_minutes: Option<RawValue>,
}

impl ActivityCandidate {
    pub fn new(
        activity_type: impl Into<String>,
        metrics: MetricsCandidate,
        duration_minutes: impl Into<RawValue>,
    ) -> Self {
        Self {
            activity_type: Some(activity_type.into()),
            metrics: Some(metrics),
            duration_minutes: Some(duration_minutes.into()),
        }
    }

    /// Parses a candidate from a JSON object.
    ///
    /// Only the shape is checked here; value rules run when the candidate is
    /// submitted to a store.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<ActivityRecord> for ActivityCandidate {
    fn from(value: ActivityRecord) -> Self {
        Self::new(
            value.activity_type,
            value.metrics.into(),
            value.duration_minutes,
        )
    }
}

impl From<&ActivityRecord> for ActivityCandidate {
    fn from(value: &ActivityRecord) -> Self {
        value.clone().into()
    }
}
