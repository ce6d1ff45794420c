//! Chance detection
//!
//! A completed pass counts as a chance when it reaches a dangerous area.
//! "Led to a shot" is a temporal proximity heuristic: any shot in
//! `[pass.minute, pass.minute + window]`. It is not a possession-chain trace,
//! so several passes in the same minute can all claim the same shot.

use serde::{Deserialize, Serialize};

use crate::config::ChanceThresholds;
use crate::events::{MatchEvent, PassEvent};
use crate::zone::{Depth, ZoneKey};

/// Chance category of a completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceType {
    /// Delivered into one of the corner zones
    CornerZone,
    /// From outside the penalty area into it
    BoxEntry,
    /// Into the final third (outside the box), progressive or followed by a shot
    FinalThirdChance,
}

impl ChanceType {
    pub const ALL: [ChanceType; 3] = [ChanceType::CornerZone, ChanceType::BoxEntry, ChanceType::FinalThirdChance];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChanceType::CornerZone => "corner_zone",
            ChanceType::BoxEntry => "box_entry",
            ChanceType::FinalThirdChance => "final_third_chance",
        }
    }
}

/// Whether a shot (and a goal) followed within the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub led_to_shot: bool,
    pub led_to_goal: bool,
}

/// Shots sorted by minute for follow-up lookups
#[derive(Debug, Clone, Default)]
pub struct ShotTimeline {
    /// (minute, scored), ascending by minute
    shots: Vec<(u32, bool)>,
}

impl ShotTimeline {
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a MatchEvent>) -> Self {
        let mut shots: Vec<(u32, bool)> = events
            .into_iter()
            .filter_map(MatchEvent::as_shot)
            .map(|s| (s.base.minute, s.scored()))
            .collect();
        shots.sort_unstable();
        Self { shots }
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Shots with `minute <= shot.minute <= minute + window`
    pub fn follow_up(&self, minute: u32, window: u32) -> FollowUp {
        let end = minute.saturating_add(window);
        let start_idx = self.shots.partition_point(|&(m, _)| m < minute);

        let mut result = FollowUp::default();
        for &(m, scored) in &self.shots[start_idx..] {
            if m > end {
                break;
            }
            result.led_to_shot = true;
            if scored {
                result.led_to_goal = true;
                break;
            }
        }
        result
    }
}

/// Classify a pass as a chance.
///
/// Incomplete passes are never chances. Precedence: corner zone, box entry,
/// final third chance.
pub fn classify_chance(
    pass: &PassEvent,
    origin_zone: ZoneKey,
    target_zone: ZoneKey,
    follow_up: FollowUp,
    thresholds: &ChanceThresholds,
) -> Option<ChanceType> {
    if !pass.base.success {
        return None;
    }

    if target_zone.is_corner() {
        return Some(ChanceType::CornerZone);
    }

    if target_zone.is_in_box() && !origin_zone.is_in_box() {
        return Some(ChanceType::BoxEntry);
    }

    if target_zone.depth() == Depth::EdgeOfBox {
        let progressive = pass.progress() > thresholds.progressive_delta;
        if progressive || follow_up.led_to_shot {
            return Some(ChanceType::FinalThirdChance);
        }
    }

    None
}
