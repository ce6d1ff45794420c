//! Classification thresholds
//!
//! | Group | Description |
//! |-------|-------------|
//! | Pass | Length bands in metres |
//! | Chance | Progressive delta and shot follow-up window |

use serde::{Deserialize, Serialize};

/// Pass length bands (metres). Bands are half-open:
/// short `[0, short_max_m)`, medium `[short_max_m, medium_max_m)`,
/// long `[medium_max_m, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassThresholds {
    pub short_max_m: f64,
    pub medium_max_m: f64,
}

impl Default for PassThresholds {
    fn default() -> Self {
        Self { short_max_m: 10.0, medium_max_m: 25.0 }
    }
}

/// Chance detection thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChanceThresholds {
    /// A pass is progressive when `targetX - x` exceeds this (normalized units)
    pub progressive_delta: f64,
    /// A shot within `[pass.minute, pass.minute + window]` counts as a follow-up
    pub follow_up_window_minutes: u32,
}

impl Default for ChanceThresholds {
    fn default() -> Self {
        Self { progressive_delta: 10.0, follow_up_window_minutes: 1 }
    }
}
