//! # Analysis Pipeline
//!
//! ```text
//! events -> filter -> coordinate policy -> classify -> aggregate
//!                                       \-> heatmap
//!                                       \-> passing network
//! ```
//!
//! Every call builds a fresh [`MatchAnalysis`] from its inputs. Nothing is
//! cached here; see [`crate::cache`] for memoization keyed by dataset and
//! filter.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{aggregate_chances, ChanceReport, PassSummary, ShotSummary};
use crate::classify::{classify_passes, classify_shots, ClassifiedPass, ClassifiedShot, ShotTimeline};
use crate::config::AnalysisConfig;
use crate::coordinates::{CoordinatePolicy, NormPos};
use crate::error::Result;
use crate::events::MatchEvent;
use crate::heatmap::HeatmapGrid;
use crate::interval::TimeInterval;
use crate::network::PassNetwork;

/// Event selection applied before analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AnalysisFilter {
    /// Only events whose minute falls inside the interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<TimeInterval>,
    /// Only events performed by this player id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

impl AnalysisFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(mut self, interval: TimeInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.interval.is_none() && self.player.is_none()
    }

    pub fn matches(&self, event: &MatchEvent) -> bool {
        if let Some(interval) = &self.interval {
            if !interval.contains(event.minute()) {
                return false;
            }
        }
        match &self.player {
            Some(player) => event.player() == Some(player.as_str()),
            None => true,
        }
    }
}

/// Everything the rendering layer needs for one filtered event set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub filter: AnalysisFilter,
    /// Events left after filtering
    pub event_count: usize,
    pub chances: ChanceReport,
    pub passes: PassSummary,
    pub shots: ShotSummary,
    pub heatmap: HeatmapGrid,
    pub network: PassNetwork,
    pub pass_tags: Vec<ClassifiedPass>,
    pub shot_tags: Vec<ClassifiedShot>,
}

impl MatchAnalysis {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full pipeline over `events`
pub fn analyze(events: &[MatchEvent], filter: &AnalysisFilter, config: &AnalysisConfig) -> MatchAnalysis {
    let selected = select_events(events, filter, config.coordinates);
    debug!(input = events.len(), selected = selected.len(), "events selected");

    // Follow-up shots come from the whole match: a filtered pass can still
    // lead to a shot by another player or just past the interval end.
    let timeline = ShotTimeline::from_events(events);
    let pass_tags = classify_passes(&selected, &timeline, config);
    let shot_tags = classify_shots(&selected);
    debug!(passes = pass_tags.len(), shots = shot_tags.len(), "events classified");

    let chances = aggregate_chances(&pass_tags);
    let passes = PassSummary::from_passes(&pass_tags, &config.chances);
    let shots = ShotSummary::from_shots(&shot_tags);
    let heatmap = HeatmapGrid::from_events(&selected, &config.heatmap);
    let network = PassNetwork::build(&selected, &config.network);
    debug!(
        chances = chances.summary.total,
        max_intensity = heatmap.max_intensity,
        links = network.links.len(),
        "analysis complete"
    );

    MatchAnalysis {
        filter: filter.clone(),
        event_count: selected.len(),
        chances,
        passes,
        shots,
        heatmap,
        network,
        pass_tags,
        shot_tags,
    }
}

/// Filter and normalize events, borrowing when neither changes anything
pub fn select_events<'a>(events: &'a [MatchEvent], filter: &AnalysisFilter, policy: CoordinatePolicy) -> Cow<'a, [MatchEvent]> {
    if filter.is_empty() && policy == CoordinatePolicy::PassThrough {
        return Cow::Borrowed(events);
    }

    let selected = events
        .iter()
        .filter(|ev| filter.matches(ev))
        .cloned()
        .map(|mut ev| {
            apply_policy(&mut ev, policy);
            ev
        })
        .collect();
    Cow::Owned(selected)
}

fn apply_policy(event: &mut MatchEvent, policy: CoordinatePolicy) {
    if policy == CoordinatePolicy::PassThrough {
        return;
    }

    let base = event.base_mut();
    let origin = policy.apply(base.origin());
    base.x = origin.x;
    base.y = origin.y;

    let target = match event {
        MatchEvent::Pass(p) => Some((&mut p.target_x, &mut p.target_y)),
        MatchEvent::Shot(s) => Some((&mut s.target_x, &mut s.target_y)),
        _ => None,
    };
    if let Some((tx, ty)) = target {
        let pos = policy.apply(NormPos::new(*tx, *ty));
        *tx = pos.x;
        *ty = pos.y;
    }
}
