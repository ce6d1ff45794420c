//! # Analysis Configuration
//!
//! All tunable values for the analysis pipeline live here instead of being
//! scattered as literals. Pitch geometry is not configurable; see
//! [`crate::pitch_constants`].
//!
//! ## Usage
//! ```rust
//! use pa_core::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! let compact = AnalysisConfig::compact();
//! assert!(config.validate().is_ok());
//! assert!(compact.heatmap.cols < config.heatmap.cols);
//! ```
//!
//! ## Environment Variables
//!
//! - `PA_ANALYSIS_CONFIG`: path to a JSON config file; missing keys fall back
//!   to defaults

mod heatmap;
mod thresholds;

pub use heatmap::{HeatmapConfig, PitchRegion};
pub use thresholds::{ChanceThresholds, PassThresholds};

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::coordinates::CoordinatePolicy;
use crate::error::{AnalysisError, Result};

pub const CONFIG_PATH_ENV: &str = "PA_ANALYSIS_CONFIG";

/// Passing network options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Links with fewer completed passes are dropped from the output
    pub min_link_passes: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { min_link_passes: 1 }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub passes: PassThresholds,
    pub chances: ChanceThresholds,
    pub heatmap: HeatmapConfig,
    pub network: NetworkConfig,
    pub coordinates: CoordinatePolicy,
}

impl AnalysisConfig {
    /// Coarser 6x10 heatmap for small widgets
    pub fn compact() -> Self {
        Self { heatmap: HeatmapConfig::new(6, 10), ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from the file named by `PA_ANALYSIS_CONFIG` or use defaults.
    ///
    /// A set but unreadable or invalid file is logged and ignored.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        let path = path.trim();
        if path.is_empty() {
            return Self::default();
        }

        match Self::from_path(Path::new(path)) {
            Ok(config) => {
                info!(path, "loaded analysis config from {}", CONFIG_PATH_ENV);
                config
            }
            Err(err) => {
                warn!(path, error = %err, "ignoring analysis config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.passes;
        if !(p.short_max_m > 0.0 && p.medium_max_m > p.short_max_m) {
            return Err(AnalysisError::InvalidConfig(format!(
                "pass bands must satisfy 0 < short_max_m < medium_max_m (got {} / {})",
                p.short_max_m, p.medium_max_m
            )));
        }

        let h = &self.heatmap;
        if !(1..=HeatmapConfig::MAX_DIM).contains(&h.rows) || !(1..=HeatmapConfig::MAX_DIM).contains(&h.cols) {
            return Err(AnalysisError::InvalidConfig(format!(
                "heatmap grid must be between 1x1 and {max}x{max} (got {}x{})",
                h.rows,
                h.cols,
                max = HeatmapConfig::MAX_DIM
            )));
        }
        if !(h.smoothing_weight >= 0.0 && h.smoothing_weight.is_finite()) {
            return Err(AnalysisError::InvalidConfig(format!(
                "heatmap smoothing weight must be a non-negative number (got {})",
                h.smoothing_weight
            )));
        }
        if !(h.region.width() > 0.0 && h.region.height() > 0.0) {
            return Err(AnalysisError::InvalidConfig("heatmap region has no area".to_string()));
        }

        if !self.chances.progressive_delta.is_finite() {
            return Err(AnalysisError::InvalidConfig("progressive delta must be finite".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.passes.short_max_m, 10.0);
        assert_eq!(config.passes.medium_max_m, 25.0);
        assert_eq!(config.heatmap.smoothing_weight, 0.3);
        assert_eq!(config.chances.follow_up_window_minutes, 1);
        assert_eq!(config.coordinates, CoordinatePolicy::PassThrough);
        assert!(AnalysisConfig::compact().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AnalysisConfig::from_json(r#"{"heatmap":{"rows":6},"coordinates":"clamp"}"#).unwrap();
        assert_eq!(config.heatmap.rows, 6);
        assert_eq!(config.heatmap.cols, 12);
        assert_eq!(config.coordinates, CoordinatePolicy::Clamp);
        assert_eq!(config.passes, PassThresholds::default());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let err = AnalysisConfig::from_json(r#"{"heatmap":{"cols":0}}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));

        let err = AnalysisConfig::from_json(r#"{"heatmap":{"rows":4000000000}}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));
        assert!(AnalysisConfig::from_json(r#"{"heatmap":{"rows":200,"cols":200}}"#).is_ok());

        let err = AnalysisConfig::from_json(r#"{"passes":{"short_max_m":30,"medium_max_m":25}}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));

        let err = AnalysisConfig::from_json(r#"{"heatmap":{"smoothing_weight":-0.1}}"#).unwrap_err();
        assert!(err.is_recoverable());

        let err = AnalysisConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"network":{{"min_link_passes":3}}}}"#).unwrap();
        let config = AnalysisConfig::from_path(file.path()).unwrap();
        assert_eq!(config.network.min_link_passes, 3);

        let missing = AnalysisConfig::from_path(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(AnalysisError::Io(_))));
    }
}
