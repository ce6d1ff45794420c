//! Coordinate system conversions
//!
//! Three spaces are in play:
//!
//! **Normalized event space** (what the data store hands us):
//! - X: 0-100 along the pitch length, attacking toward X=100
//! - Y: 0-100 across the pitch width
//!
//! **Pitch metres** (used for distances):
//! - X: 0-105, Y: 0-68
//!
//! **Viewport** (what the rendering layer draws into):
//! - percentages of an SVG viewBox that may carry padding around the pitch,
//!   optionally rotated for vertical layouts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pitch_constants::field;

/// Position in normalized event coordinates (0-100 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct NormPos {
    pub x: f64,
    pub y: f64,
}

impl NormPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to pitch metres
    pub fn to_pitch(self) -> PitchPos {
        let (x, y) = to_pitch_units(self.x, self.y);
        PitchPos { x, y }
    }

    /// Distance to another position in actual metres.
    ///
    /// The two axes have different scales (105m vs 68m), so the normalized
    /// deltas are converted before taking the norm.
    pub fn distance_meters(&self, other: &NormPos) -> f64 {
        distance_meters(self.x, self.y, other.x, other.y)
    }

    /// Clamp both axes into [0, 100]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, field::NORM_MAX),
            y: self.y.clamp(0.0, field::NORM_MAX),
        }
    }

    pub fn is_in_bounds(&self) -> bool {
        (0.0..=field::NORM_MAX).contains(&self.x) && (0.0..=field::NORM_MAX).contains(&self.y)
    }
}

/// Position in pitch metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchPos {
    pub x: f64,
    pub y: f64,
}

/// Convert normalized (0-100) coordinates to pitch metres
#[inline]
pub fn to_pitch_units(x: f64, y: f64) -> (f64, f64) {
    (x / field::NORM_MAX * field::LENGTH_M, y / field::NORM_MAX * field::WIDTH_M)
}

/// Euclidean distance in metres between two normalized positions
pub fn distance_meters(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (px1, py1) = to_pitch_units(x1, y1);
    let (px2, py2) = to_pitch_units(x2, y2);
    ((px2 - px1).powi(2) + (py2 - py1).powi(2)).sqrt()
}

/// How the pitch is laid out on the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Pitch length runs left to right
    #[default]
    Horizontal,
    /// Pitch length runs bottom to top (attacking upward)
    Vertical,
}

/// SVG-style viewBox in pitch-metre units.
///
/// A pitch map drawn at 105x68 with 5m of padding would use
/// `ViewBox { min_x: -5.0, min_y: -5.0, width: 115.0, height: 78.0 }`.
/// For `Orientation::Vertical` the box is expressed in the rotated frame
/// (width spans the 68m side, height the 105m side).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub orientation: Orientation,
}

impl ViewBox {
    /// ViewBox that exactly covers the pitch with no padding
    pub fn pitch(orientation: Orientation) -> Self {
        let (width, height) = match orientation {
            Orientation::Horizontal => (field::LENGTH_M, field::WIDTH_M),
            Orientation::Vertical => (field::WIDTH_M, field::LENGTH_M),
        };
        Self { min_x: 0.0, min_y: 0.0, width, height, orientation }
    }

    /// Same as [`ViewBox::pitch`] with uniform padding (metres) on all sides
    pub fn padded(orientation: Orientation, padding_m: f64) -> Self {
        let base = Self::pitch(orientation);
        Self {
            min_x: -padding_m,
            min_y: -padding_m,
            width: base.width + 2.0 * padding_m,
            height: base.height + 2.0 * padding_m,
            orientation,
        }
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::pitch(Orientation::Horizontal)
    }
}

/// Map a normalized event position into viewport percentages.
///
/// Returns `(vx, vy)` in percent of the viewBox extent. A degenerate
/// viewBox (zero width or height) yields 0 on that axis.
pub fn to_viewport_percent(x: f64, y: f64, view_box: &ViewBox) -> (f64, f64) {
    let (px, py) = to_pitch_units(x, y);

    // Rotated layout: width axis becomes horizontal, length runs upward
    let (ux, uy) = match view_box.orientation {
        Orientation::Horizontal => (px, py),
        Orientation::Vertical => (py, field::LENGTH_M - px),
    };

    let vx = if view_box.width != 0.0 {
        (ux - view_box.min_x) / view_box.width * 100.0
    } else {
        0.0
    };
    let vy = if view_box.height != 0.0 {
        (uy - view_box.min_y) / view_box.height * 100.0
    } else {
        0.0
    };
    (vx, vy)
}

/// Handling of coordinates outside [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// Leave values untouched (markers may land outside the pitch)
    #[default]
    PassThrough,
    /// Clamp into [0, 100] before classification and rendering
    Clamp,
}

impl CoordinatePolicy {
    #[inline]
    pub fn apply(self, pos: NormPos) -> NormPos {
        match self {
            CoordinatePolicy::PassThrough => pos,
            CoordinatePolicy::Clamp => pos.clamped(),
        }
    }
}
