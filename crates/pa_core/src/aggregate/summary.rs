use serde::{Deserialize, Serialize};

use super::{rounded_percent, safe_ratio};
use crate::classify::{ClassifiedPass, ClassifiedShot, PassLength};
use crate::config::ChanceThresholds;
use crate::events::ShotOutcome;

/// Passing volume and accuracy for one filtered event set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassSummary {
    pub total: u32,
    pub successful: u32,
    /// round(successful / total * 100)
    pub accuracy: u32,
    pub short: u32,
    pub medium: u32,
    pub long: u32,
    /// Passes moving the ball forward by more than the progressive delta
    pub progressive: u32,
    #[serde(rename = "averageLengthM")]
    pub average_length_m: f64,
}

impl PassSummary {
    pub fn from_passes(passes: &[ClassifiedPass], thresholds: &ChanceThresholds) -> Self {
        let mut summary = Self::default();
        let mut length_sum = 0.0;

        for pass in passes {
            summary.total += 1;
            if pass.success {
                summary.successful += 1;
            }
            match pass.geometry.length {
                PassLength::Short => summary.short += 1,
                PassLength::Medium => summary.medium += 1,
                PassLength::Long => summary.long += 1,
            }
            if pass.geometry.progress > thresholds.progressive_delta {
                summary.progressive += 1;
            }
            length_sum += pass.geometry.distance_m;
        }

        summary.accuracy = rounded_percent(summary.successful, summary.total);
        summary.average_length_m = safe_ratio(length_sum, summary.total as f64);
        summary
    }
}

/// Shot volume, outcomes and expected goals for one filtered event set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSummary {
    pub total: u32,
    pub goals: u32,
    /// Goals plus saved shots
    pub on_target: u32,
    pub saved: u32,
    pub missed: u32,
    pub blocked: u32,
    /// Shots with no recorded outcome
    pub unknown: u32,
    pub big_chances: u32,
    #[serde(rename = "totalXG")]
    pub total_xg: f64,
    #[serde(rename = "avgXG")]
    pub avg_xg: f64,
    /// round(goals / total * 100)
    pub conversion_rate: u32,
}

impl ShotSummary {
    pub fn from_shots(shots: &[ClassifiedShot]) -> Self {
        let mut summary = Self::default();

        for shot in shots {
            let tags = &shot.tags;
            summary.total += 1;
            match tags.outcome {
                Some(ShotOutcome::Goal) => summary.goals += 1,
                Some(ShotOutcome::Saved) => summary.saved += 1,
                Some(ShotOutcome::Missed) => summary.missed += 1,
                Some(ShotOutcome::Blocked) => summary.blocked += 1,
                None => summary.unknown += 1,
            }
            if tags.on_target {
                summary.on_target += 1;
            }
            if tags.big_chance {
                summary.big_chances += 1;
            }
            summary.total_xg += tags.xg;
        }

        summary.avg_xg = safe_ratio(summary.total_xg, summary.total as f64);
        summary.conversion_rate = rounded_percent(summary.goals, summary.total);
        summary
    }

    /// Goals minus expected goals
    pub fn xg_difference(&self) -> f64 {
        self.goals as f64 - self.total_xg
    }
}
