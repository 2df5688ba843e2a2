//! Health metrics table and average health metrics chart.

use crate::model::activity::{ActivityRef, HealthMetric};
use crate::projection::group_by_activity_type;
use serde::Serialize;

/// One row of the health metrics table: summed scores per activity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthMetricsRow {
    pub activity_type: String,
    pub entries: usize,
    pub total_energy: u64,
    pub total_stress: u64,
    pub total_happiness: u64,
}

impl HealthMetricsRow {
    pub fn total(&self, metric: HealthMetric) -> u64 {
        match metric {
            HealthMetric::Energy => self.total_energy,
            HealthMetric::Stress => self.total_stress,
            HealthMetric::Happiness => self.total_happiness,
        }
    }
}

/// Mean scores per activity type; the bar heights of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageHealthMetrics {
    pub activity_type: String,
    pub entries: usize,
    pub energy: f64,
    pub stress: f64,
    pub happiness: f64,
}

impl AverageHealthMetrics {
    pub fn value(&self, metric: HealthMetric) -> f64 {
        match metric {
            HealthMetric::Energy => self.energy,
            HealthMetric::Stress => self.stress,
            HealthMetric::Happiness => self.happiness,
        }
    }

    /// Bars to draw for this activity, in metric order, honoring `toggles`.
    pub fn bars(&self, toggles: MetricToggles) -> Vec<(HealthMetric, f64)> {
        HealthMetric::ALL
            .into_iter()
            .filter(|metric| toggles.is_enabled(*metric))
            .map(|metric| (metric, self.value(metric)))
            .collect()
    }
}

/// Which metric series the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricToggles {
    pub energy: bool,
    pub stress: bool,
    pub happiness: bool,
}

impl MetricToggles {
    pub fn is_enabled(&self, metric: HealthMetric) -> bool {
        match metric {
            HealthMetric::Energy => self.energy,
            HealthMetric::Stress => self.stress,
            HealthMetric::Happiness => self.happiness,
        }
    }
}

impl Default for MetricToggles {
    fn default() -> Self {
        Self {
            energy: true,
            stress: true,
            happiness: true,
        }
    }
}

/// Builds one summed row per activity type.
pub fn health_metrics_table(records: &[ActivityRef]) -> Vec<HealthMetricsRow> {
    group_by_activity_type(records)
        .into_iter()
        .map(|group| {
            let mut row = HealthMetricsRow {
                activity_type: group.activity_type.to_string(),
                entries: group.records.len(),
                total_energy: 0,
                total_stress: 0,
                total_happiness: 0,
            };
            for record in &group.records {
                let metrics = record.metrics();
                row.total_energy += u64::from(metrics.energy_level());
                row.total_stress += u64::from(metrics.stress_level());
                row.total_happiness += u64::from(metrics.happiness_level());
            }
            row
        })
        .collect()
}

/// Builds one averaged entry per activity type.
pub fn average_health_metrics(records: &[ActivityRef]) -> Vec<AverageHealthMetrics> {
    health_metrics_table(records)
        .into_iter()
        .map(|row| {
            // Groups are never empty.
            let entries = row.entries as f64;
            AverageHealthMetrics {
                energy: row.total_energy as f64 / entries,
                stress: row.total_stress as f64 / entries,
                happiness: row.total_happiness as f64 / entries,
                entries: row.entries,
                activity_type: row.activity_type,
            }
        })
        .collect()
}
