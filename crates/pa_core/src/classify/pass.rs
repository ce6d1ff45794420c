//! Pass Length Classifier
//!
//! Classifies passes by distance travelled in metres.

use serde::{Deserialize, Serialize};

use crate::config::PassThresholds;
use crate::events::PassEvent;
use crate::zone::{classify_pos, ZoneKey};

/// Pass length band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassLength {
    /// Under 10m
    Short,
    /// 10m up to (not including) 25m
    Medium,
    /// 25m and beyond
    Long,
}

impl PassLength {
    pub const ALL: [PassLength; 3] = [PassLength::Short, PassLength::Medium, PassLength::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            PassLength::Short => "short",
            PassLength::Medium => "medium",
            PassLength::Long => "long",
        }
    }
}

/// Classify a distance in metres. Bands are half-open, so a pass of exactly
/// `short_max_m` is medium and exactly `medium_max_m` is long.
pub fn classify_pass_length(distance_m: f64, thresholds: &PassThresholds) -> PassLength {
    if distance_m < thresholds.short_max_m {
        PassLength::Short
    } else if distance_m < thresholds.medium_max_m {
        PassLength::Medium
    } else {
        PassLength::Long
    }
}

/// Geometry of a single pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassGeometry {
    pub length: PassLength,
    pub distance_m: f64,
    /// Forward progress in normalized X units
    pub progress: f64,
    pub origin_zone: ZoneKey,
    pub target_zone: ZoneKey,
}

/// Measure and classify a pass
pub fn classify_pass(pass: &PassEvent, thresholds: &PassThresholds) -> PassGeometry {
    let origin = pass.base.origin();
    let target = pass.target();
    let distance_m = origin.distance_meters(&target);

    PassGeometry {
        length: classify_pass_length(distance_m, thresholds),
        distance_m,
        progress: pass.progress(),
        origin_zone: classify_pos(origin),
        target_zone: classify_pos(target),
    }
}
