//! Pitch geometry constants
//!
//! Event coordinates are normalized to 0-100 on both axes:
//! - X: 0 = own goal line, 100 = opponent goal line (length, 105m)
//! - Y: 0 = left touchline, 100 = right touchline (width, 68m)
//!
//! Every threshold below is expressed in that normalized space.

/// Physical pitch dimensions used for metre conversion
pub mod field {
    /// Pitch length in metres (X axis)
    pub const LENGTH_M: f64 = 105.0;

    /// Pitch width in metres (Y axis)
    pub const WIDTH_M: f64 = 68.0;

    /// Upper bound of the normalized coordinate space
    pub const NORM_MAX: f64 = 100.0;
}

/// Depth thresholds along the X axis
pub mod depth {
    /// Start of the attacking third
    pub const FINAL_THIRD_X: f64 = 66.67;

    /// Penalty area line
    pub const BOX_X: f64 = 83.0;

    /// Six-yard box line
    pub const SIX_YARD_X: f64 = 94.76;

    /// Corner zones start here
    pub const CORNER_X: f64 = 90.0;
}

/// Lateral thresholds along the Y axis
pub mod lateral {
    /// Left wing ends (exclusive)
    pub const LEFT_WING_MAX_Y: f64 = 30.0;

    /// Right wing starts (exclusive)
    pub const RIGHT_WING_MIN_Y: f64 = 70.0;

    /// Penalty area width (inclusive on both ends)
    pub const BOX_MIN_Y: f64 = 21.0;
    pub const BOX_MAX_Y: f64 = 79.0;

    /// Six-yard box width (inclusive on both ends)
    pub const SIX_YARD_MIN_Y: f64 = 36.0;
    pub const SIX_YARD_MAX_Y: f64 = 64.0;

    /// Corner zones (inclusive)
    pub const CORNER_LEFT_MAX_Y: f64 = 15.0;
    pub const CORNER_RIGHT_MIN_Y: f64 = 85.0;
}

/// Shot quality proxy parameters
pub mod xg {
    /// Goal centre in normalized coordinates
    pub const GOAL_CENTER: (f64, f64) = (100.0, 50.0);

    /// Distance (normalized units) at which the base value reaches zero
    pub const DISTANCE_SCALE: f64 = 100.0;

    /// Shots from beyond this X get the box multiplier
    pub const BOX_BONUS_X: f64 = 84.0;
    pub const BOX_MULTIPLIER: f64 = 1.5;

    /// Central corridor (exclusive on both ends)
    pub const CENTRAL_MIN_Y: f64 = 35.0;
    pub const CENTRAL_MAX_Y: f64 = 65.0;
    pub const CENTRAL_MULTIPLIER: f64 = 1.3;

    pub const MIN_XG: f64 = 0.02;
    pub const MAX_XG: f64 = 0.95;
}

/// Match clock
pub mod clock {
    /// Last minute an event can carry (end of extra time)
    pub const MAX_MINUTE: u32 = 120;

    pub const HALF_TIME: u32 = 45;
    pub const FULL_TIME: u32 = 90;
}
