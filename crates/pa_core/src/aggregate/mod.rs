//! # Zone/Stat Aggregator
//!
//! Folds classified passes into per-zone counters and match-level summaries.
//! Every run builds fresh records; nothing is mutated across calls.
//!
//! - zone stats are pre-initialized for all 14 zone keys, so sparse data
//!   still yields a complete map
//! - `max_count` is floored at 1 for divide-safe colour scaling downstream
//! - every percentage short-circuits to 0 on an empty denominator

mod summary;

pub use summary::{PassSummary, ShotSummary};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::classify::{ChanceType, ClassifiedPass};
use crate::zone::{Horizontal, ZoneKey};

/// Counters attached to one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStat {
    pub count: u32,
    pub led_to_shot: u32,
    pub led_to_goal: u32,
    pub box_entries: u32,
}

/// One [`ZoneStat`] per zone key, indexed by [`ZoneKey::index`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneStats {
    stats: [ZoneStat; ZoneKey::COUNT],
}

impl ZoneStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ZoneKey) -> &ZoneStat {
        &self.stats[key.index()]
    }

    pub fn get_mut(&mut self, key: ZoneKey) -> &mut ZoneStat {
        &mut self.stats[key.index()]
    }

    /// All zones in [`ZoneKey::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ZoneKey, &ZoneStat)> {
        ZoneKey::ALL.iter().map(move |&k| (k, &self.stats[k.index()]))
    }

    pub fn len(&self) -> usize {
        ZoneKey::COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.stats.iter().all(|s| s.count == 0)
    }

    /// Largest zone count, never below 1
    pub fn max_count(&self) -> u32 {
        self.stats.iter().map(|s| s.count).max().unwrap_or(0).max(1)
    }
}

impl Serialize for ZoneStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ZoneKey::COUNT))?;
        for (key, stat) in self.iter() {
            map.serialize_entry(key.as_str(), stat)?;
        }
        map.end()
    }
}

/// Match-level chance counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChanceSummary {
    pub total: u32,
    pub box_entries: u32,
    pub final_third_chances: u32,
    pub corner_zone_chances: u32,
    pub led_to_shot: u32,
    pub led_to_goal: u32,
    /// round(led_to_shot / total * 100), 0 when there are no chances
    pub conversion_rate: u32,
    pub left_wing: u32,
    pub center: u32,
    pub right_wing: u32,
}

/// Zone map plus summary for one filtered event set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChanceReport {
    pub zones: ZoneStats,
    pub summary: ChanceSummary,
    pub max_count: u32,
}

/// Aggregate chances by destination zone.
///
/// Passes without a chance type are ignored.
pub fn aggregate_chances<'a>(passes: impl IntoIterator<Item = &'a ClassifiedPass>) -> ChanceReport {
    let mut zones = ZoneStats::new();
    let mut summary = ChanceSummary::default();

    for pass in passes {
        let Some(chance) = pass.chance else {
            continue;
        };

        let stat = zones.get_mut(pass.geometry.target_zone);
        stat.count += 1;
        summary.total += 1;

        if pass.follow_up.led_to_shot {
            stat.led_to_shot += 1;
            summary.led_to_shot += 1;
        }
        if pass.follow_up.led_to_goal {
            stat.led_to_goal += 1;
            summary.led_to_goal += 1;
        }

        match chance {
            ChanceType::BoxEntry => {
                stat.box_entries += 1;
                summary.box_entries += 1;
            }
            ChanceType::FinalThirdChance => summary.final_third_chances += 1,
            ChanceType::CornerZone => summary.corner_zone_chances += 1,
        }

        match pass.target_horizontal {
            Horizontal::LeftWing => summary.left_wing += 1,
            Horizontal::Center => summary.center += 1,
            Horizontal::RightWing => summary.right_wing += 1,
        }
    }

    summary.conversion_rate = rounded_percent(summary.led_to_shot, summary.total);
    let max_count = zones.max_count();
    ChanceReport { zones, summary, max_count }
}

/// round(part / whole * 100), 0 when `whole` is 0
pub fn rounded_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}

/// part / whole, 0 when `whole` is 0
pub fn safe_ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole
    } else {
        0.0
    }
}
