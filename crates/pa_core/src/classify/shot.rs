//! Shot quality proxy
//!
//! Positional placeholder for shots without provider xG. This is a display
//! heuristic, not a calibrated model:
//!
//! - base = `max(0, 1 - d / 100)`, `d` = normalized distance to (100, 50)
//! - ×1.5 when `x > 84`
//! - ×1.3 when `35 < y < 65`
//! - clamped to `[0.02, 0.95]`

use serde::{Deserialize, Serialize};

use crate::coordinates::distance_meters;
use crate::events::{ShotEvent, ShotOutcome};
use crate::pitch_constants::xg;
use crate::zone::{classify, ZoneKey};

/// Positional xG estimate for a shot taken at (x, y)
pub fn estimate_xg(x: f64, y: f64) -> f64 {
    let (gx, gy) = xg::GOAL_CENTER;
    let dist = ((gx - x).powi(2) + (gy - y).powi(2)).sqrt();

    let mut value = (1.0 - dist / xg::DISTANCE_SCALE).max(0.0);
    if x > xg::BOX_BONUS_X {
        value *= xg::BOX_MULTIPLIER;
    }
    if y > xg::CENTRAL_MIN_Y && y < xg::CENTRAL_MAX_Y {
        value *= xg::CENTRAL_MULTIPLIER;
    }
    value.clamp(xg::MIN_XG, xg::MAX_XG)
}

/// Provider xG when present and finite, the positional estimate otherwise.
///
/// Returns `(xg, estimated)`.
pub fn shot_xg(shot: &ShotEvent) -> (f64, bool) {
    match shot.xg {
        Some(v) if v.is_finite() => (v.max(0.0), false),
        _ => (estimate_xg(shot.base.x, shot.base.y), true),
    }
}

/// Per-shot tags for the shot map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotClassification {
    pub zone: ZoneKey,
    pub xg: f64,
    /// True when `xg` came from the positional proxy
    pub xg_estimated: bool,
    pub outcome: Option<ShotOutcome>,
    pub on_target: bool,
    pub big_chance: bool,
    /// Distance from the shot to the goal centre in metres
    pub distance_to_goal_m: f64,
}

pub fn classify_shot(shot: &ShotEvent) -> ShotClassification {
    let (value, estimated) = shot_xg(shot);
    let (gx, gy) = xg::GOAL_CENTER;
    ShotClassification {
        zone: classify(shot.base.x, shot.base.y),
        xg: value,
        xg_estimated: estimated,
        outcome: shot.resolved_outcome(),
        on_target: shot.on_target(),
        big_chance: shot.is_big_chance,
        distance_to_goal_m: distance_meters(shot.base.x, shot.base.y, gx, gy),
    }
}
