//! # Event Type Discriminator
//!
//! - `pass` - length bands and pass geometry
//! - `chance` - chance categories and the shot follow-up heuristic
//! - `shot` - positional xG proxy and shot tags

pub mod chance;
pub mod pass;
pub mod shot;

pub use chance::{classify_chance, ChanceType, FollowUp, ShotTimeline};
pub use pass::{classify_pass, classify_pass_length, PassGeometry, PassLength};
pub use shot::{classify_shot, estimate_xg, shot_xg, ShotClassification};

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::events::MatchEvent;
use crate::zone::Horizontal;

/// Classification tags for one pass, attached for point-by-point rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedPass {
    /// Position of the pass in the analysed event list
    pub index: usize,
    pub minute: u32,
    pub success: bool,
    #[serde(flatten)]
    pub geometry: PassGeometry,
    /// Lateral third of the destination (kept for corner destinations too)
    pub target_horizontal: Horizontal,
    pub chance: Option<ChanceType>,
    #[serde(flatten)]
    pub follow_up: FollowUp,
}

/// Classification tags for one shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedShot {
    pub index: usize,
    pub minute: u32,
    #[serde(flatten)]
    pub tags: ShotClassification,
}

/// Classify every pass in `events`
pub fn classify_passes(events: &[MatchEvent], timeline: &ShotTimeline, config: &AnalysisConfig) -> Vec<ClassifiedPass> {
    events
        .iter()
        .enumerate()
        .filter_map(|(index, ev)| ev.as_pass().map(|p| (index, p)))
        .map(|(index, pass)| {
            let geometry = classify_pass(pass, &config.passes);
            let follow_up = timeline.follow_up(pass.base.minute, config.chances.follow_up_window_minutes);
            let chance = classify_chance(pass, geometry.origin_zone, geometry.target_zone, follow_up, &config.chances);
            ClassifiedPass {
                index,
                minute: pass.base.minute,
                success: pass.base.success,
                geometry,
                target_horizontal: Horizontal::of(pass.target_y),
                chance,
                follow_up,
            }
        })
        .collect()
}

/// Classify every shot in `events`
pub fn classify_shots(events: &[MatchEvent]) -> Vec<ClassifiedShot> {
    events
        .iter()
        .enumerate()
        .filter_map(|(index, ev)| {
            ev.as_shot().map(|s| ClassifiedShot { index, minute: s.base.minute, tags: classify_shot(s) })
        })
        .collect()
}
