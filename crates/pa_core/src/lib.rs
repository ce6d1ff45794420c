//! # pa_core - Spatial Event Classification and Zone Aggregation
//!
//! Turns football match events (normalized 0-100 coordinates, minutes and
//! outcome flags) into the data a match dashboard renders:
//! - zone-bucketed chance counts with shot/goal follow-up rates
//! - pass and shot classifications (length bands, chance types, xG proxy)
//! - smoothed heatmap grids
//! - passing networks
//!
//! Every stage is a pure function over its input list and an
//! [`AnalysisConfig`]; [`cache::AnalysisCache`] adds optional memoization.
//!
//! ```rust
//! use pa_core::{analyze, parse_events, AnalysisConfig, AnalysisFilter};
//!
//! let json = r#"[
//!     {"type":"pass","minute":10,"x":70,"y":50,"targetX":90,"targetY":50,"success":true},
//!     {"type":"shot","minute":10,"x":90,"y":50,"isGoal":true}
//! ]"#;
//! let report = parse_events(json).unwrap();
//! let analysis = analyze(&report.events, &AnalysisFilter::new(), &AnalysisConfig::default());
//! assert_eq!(analysis.chances.summary.box_entries, 1);
//! assert_eq!(analysis.chances.summary.conversion_rate, 100);
//! ```

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Large enum variants - events are small, boxing buys nothing
#![allow(clippy::large_enum_variant)]

pub mod aggregate;
pub mod cache;
pub mod classify;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod events;
pub mod heatmap;
pub mod ingest;
pub mod interval;
pub mod network;
pub mod pipeline;
pub mod pitch_constants;
pub mod zone;

pub use aggregate::{aggregate_chances, ChanceReport, ChanceSummary, PassSummary, ShotSummary, ZoneStat, ZoneStats};
pub use cache::{AnalysisCache, DatasetId};
pub use classify::{ChanceType, ClassifiedPass, ClassifiedShot, PassLength};
pub use config::AnalysisConfig;
pub use coordinates::NormPos;
pub use error::{AnalysisError, Result};
pub use events::{EventBase, MatchEvent, PassEvent, ShotEvent, ShotOutcome};
pub use heatmap::HeatmapGrid;
pub use ingest::{load_events, parse_events, IngestReport};
pub use interval::TimeInterval;
pub use network::PassNetwork;
pub use pipeline::{analyze, AnalysisFilter, MatchAnalysis};
pub use zone::{classify, ZoneKey};
