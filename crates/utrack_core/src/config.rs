//! Tracker configuration.
//!
//! # Responsibility
//! - Describe the knobs of a tracker session (logging, demo data, start graph).
//! - Load them from JSON with per-key defaults.
//!
//! # Invariants
//! - Missing keys fall back to `TrackerConfig::default()`.
//! - Unknown graph names are rejected instead of silently defaulted.

use crate::fixture::DEFAULT_FAKE_DATA_POINTS;
use crate::logging::default_log_level;
use crate::model::graph::GraphName;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Session configuration for a tracker host (CLI, embedding app).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Number of fake entries to seed on startup. `0` seeds nothing.
    pub fake_data_points: usize,
    /// Graph selected once the selector is created.
    pub initial_graph: GraphName,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            fake_data_points: DEFAULT_FAKE_DATA_POINTS,
            initial_graph: GraphName::TimeTable,
        }
    }
}

impl TrackerConfig {
    /// Parses configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Configuration loading failure.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TrackerConfig};
    use crate::model::graph::GraphName;

    #[test]
    fn empty_object_yields_defaults() {
        let config = TrackerConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = TrackerConfig::from_json_str(
            r#"{"fake_data_points": 5, "initial_graph": "AverageHealthMetricsGraph"}"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.fake_data_points, 5);
        assert_eq!(config.initial_graph, GraphName::AverageHealthMetricsGraph);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn unknown_graph_name_is_rejected() {
        let err = TrackerConfig::from_json_str(r#"{"initial_graph": "PieChart"}"#)
            .expect_err("unknown graph must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
