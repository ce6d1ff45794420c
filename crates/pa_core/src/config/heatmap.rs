use serde::{Deserialize, Serialize};

use crate::coordinates::NormPos;

/// Rectangle of the pitch in normalized coordinates (inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PitchRegion {
    pub const FULL: PitchRegion = PitchRegion { x_min: 0.0, x_max: 100.0, y_min: 0.0, y_max: 100.0 };

    /// Opponent half (X >= 50)
    pub const ATTACKING_HALF: PitchRegion = PitchRegion { x_min: 50.0, x_max: 100.0, y_min: 0.0, y_max: 100.0 };

    /// Final third (X >= 66.67)
    pub const FINAL_THIRD: PitchRegion = PitchRegion { x_min: 66.67, x_max: 100.0, y_min: 0.0, y_max: 100.0 };

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, pos: NormPos) -> bool {
        (self.x_min..=self.x_max).contains(&pos.x) && (self.y_min..=self.y_max).contains(&pos.y)
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }
}

impl Default for PitchRegion {
    fn default() -> Self {
        Self::FULL
    }
}

/// Heatmap grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub rows: usize,
    pub cols: usize,
    /// Weight added to each orthogonal neighbour per event
    pub smoothing_weight: f64,
    pub region: PitchRegion,
}

impl HeatmapConfig {
    /// Largest accepted row or column count
    pub const MAX_DIM: usize = 200;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn with_region(mut self, region: PitchRegion) -> Self {
        self.region = region;
        self
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        // 8x12 over 105x68m is ~8.75m x 8.5m per cell
        Self { rows: 8, cols: 12, smoothing_weight: 0.3, region: PitchRegion::FULL }
    }
}
