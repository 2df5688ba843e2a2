//! Selectable visualization names.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the fixed visualizations a user can switch between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphName {
    /// Minutes spent per activity.
    #[default]
    TimeTable,
    /// Summed health scores per activity.
    HealthMetricsTable,
    /// Bar chart of average health scores per activity.
    AverageHealthMetricsGraph,
}

impl GraphName {
    /// Every available graph, in tab order.
    pub const ALL: [GraphName; 3] = [
        Self::TimeTable,
        Self::HealthMetricsTable,
        Self::AverageHealthMetricsGraph,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimeTable => "TimeTable",
            Self::HealthMetricsTable => "HealthMetricsTable",
            Self::AverageHealthMetricsGraph => "AverageHealthMetricsGraph",
        }
    }
}

impl Display for GraphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphName {
    type Err = UnknownGraphName;

    /// Matches names exactly; no trimming or case folding.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| UnknownGraphName(value.to_string()))
    }
}

/// Requested graph name is not one of `GraphName::ALL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGraphName(pub String);

impl Display for UnknownGraphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown graph name: `{}`", self.0)
    }
}

impl Error for UnknownGraphName {}

#[cfg(test)]
mod tests {
    use super::GraphName;

    #[test]
    fn parses_exact_names_only() {
        assert_eq!(
            "HealthMetricsTable".parse::<GraphName>().unwrap(),
            GraphName::HealthMetricsTable
        );
        assert!("healthmetricstable".parse::<GraphName>().is_err());
        assert!(" TimeTable".parse::<GraphName>().is_err());
    }

    #[test]
    fn default_is_time_table() {
        assert_eq!(GraphName::default(), GraphName::TimeTable);
    }
}
