//! Zone Definitions
//!
//! Every (x, y) in normalized event space maps to exactly one of 14 zone keys.
//!
//! ## Axes
//! - Horizontal (always computed): left wing / center / right wing
//! - Depth: deep / edge of box / inside box / six-yard box, plus two corner
//!   zones that ignore the horizontal axis
//!
//! ## Precedence (first match wins)
//! 1. Corner: `x >= 90` and `y <= 15` (left) or `y >= 85` (right)
//! 2. Six-yard: `x >= 94.76` and `36 <= y <= 64`
//! 3. Box: `x >= 83` and `21 <= y <= 79`
//! 4. Final third: `x >= 66.67`
//! 5. Deep
//!
//! The key set holds all 12 horizontal × depth combinations plus the two
//! corners. `left_wing-six_yard` and `right_wing-six_yard` are part of the
//! set (aggregates always carry them) but no coordinate produces them.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinates::NormPos;
use crate::pitch_constants::{depth, lateral};

/// Lateral third of the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Horizontal {
    LeftWing,
    Center,
    RightWing,
}

impl Horizontal {
    pub const ALL: [Horizontal; 3] = [Horizontal::LeftWing, Horizontal::Center, Horizontal::RightWing];

    /// Lateral category of a Y coordinate
    pub fn of(y: f64) -> Self {
        if y < lateral::LEFT_WING_MAX_Y {
            Horizontal::LeftWing
        } else if y > lateral::RIGHT_WING_MIN_Y {
            Horizontal::RightWing
        } else {
            Horizontal::Center
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Horizontal::LeftWing => "left_wing",
            Horizontal::Center => "center",
            Horizontal::RightWing => "right_wing",
        }
    }
}

/// Depth band of a position, corners included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    Deep,
    EdgeOfBox,
    InsideBox,
    SixYard,
    CornerLeft,
    CornerRight,
}

impl Depth {
    /// Depth band of a position, evaluated in precedence order
    pub fn of(x: f64, y: f64) -> Self {
        if x >= depth::CORNER_X {
            if y <= lateral::CORNER_LEFT_MAX_Y {
                return Depth::CornerLeft;
            }
            if y >= lateral::CORNER_RIGHT_MIN_Y {
                return Depth::CornerRight;
            }
        }
        if x >= depth::SIX_YARD_X && (lateral::SIX_YARD_MIN_Y..=lateral::SIX_YARD_MAX_Y).contains(&y) {
            return Depth::SixYard;
        }
        if is_in_box(x, y) {
            return Depth::InsideBox;
        }
        if x >= depth::FINAL_THIRD_X {
            return Depth::EdgeOfBox;
        }
        Depth::Deep
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Deep => "deep",
            Depth::EdgeOfBox => "edge_of_box",
            Depth::InsideBox => "inside_box",
            Depth::SixYard => "six_yard",
            Depth::CornerLeft => "corner_left",
            Depth::CornerRight => "corner_right",
        }
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Depth::CornerLeft | Depth::CornerRight)
    }
}

/// Penalty-area membership (six-yard box included)
#[inline]
pub fn is_in_box(x: f64, y: f64) -> bool {
    x >= depth::BOX_X && (lateral::BOX_MIN_Y..=lateral::BOX_MAX_Y).contains(&y)
}

/// Zone key: composite `{horizontal}-{depth}` or a standalone corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum ZoneKey {
    #[serde(rename = "left_wing-deep")]
    LeftWingDeep,
    #[serde(rename = "left_wing-edge_of_box")]
    LeftWingEdgeOfBox,
    #[serde(rename = "left_wing-inside_box")]
    LeftWingInsideBox,
    #[serde(rename = "left_wing-six_yard")]
    LeftWingSixYard,
    #[serde(rename = "center-deep")]
    CenterDeep,
    #[serde(rename = "center-edge_of_box")]
    CenterEdgeOfBox,
    #[serde(rename = "center-inside_box")]
    CenterInsideBox,
    #[serde(rename = "center-six_yard")]
    CenterSixYard,
    #[serde(rename = "right_wing-deep")]
    RightWingDeep,
    #[serde(rename = "right_wing-edge_of_box")]
    RightWingEdgeOfBox,
    #[serde(rename = "right_wing-inside_box")]
    RightWingInsideBox,
    #[serde(rename = "right_wing-six_yard")]
    RightWingSixYard,
    #[serde(rename = "corner_left")]
    CornerLeft,
    #[serde(rename = "corner_right")]
    CornerRight,
}

impl ZoneKey {
    /// Number of defined zone keys
    pub const COUNT: usize = 14;

    /// All zone keys in stable order
    pub const ALL: [ZoneKey; ZoneKey::COUNT] = [
        ZoneKey::LeftWingDeep,
        ZoneKey::LeftWingEdgeOfBox,
        ZoneKey::LeftWingInsideBox,
        ZoneKey::LeftWingSixYard,
        ZoneKey::CenterDeep,
        ZoneKey::CenterEdgeOfBox,
        ZoneKey::CenterInsideBox,
        ZoneKey::CenterSixYard,
        ZoneKey::RightWingDeep,
        ZoneKey::RightWingEdgeOfBox,
        ZoneKey::RightWingInsideBox,
        ZoneKey::RightWingSixYard,
        ZoneKey::CornerLeft,
        ZoneKey::CornerRight,
    ];

    /// Get zone index (0-13), matching the order of [`ZoneKey::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ZoneKey::LeftWingDeep => 0,
            ZoneKey::LeftWingEdgeOfBox => 1,
            ZoneKey::LeftWingInsideBox => 2,
            ZoneKey::LeftWingSixYard => 3,
            ZoneKey::CenterDeep => 4,
            ZoneKey::CenterEdgeOfBox => 5,
            ZoneKey::CenterInsideBox => 6,
            ZoneKey::CenterSixYard => 7,
            ZoneKey::RightWingDeep => 8,
            ZoneKey::RightWingEdgeOfBox => 9,
            ZoneKey::RightWingInsideBox => 10,
            ZoneKey::RightWingSixYard => 11,
            ZoneKey::CornerLeft => 12,
            ZoneKey::CornerRight => 13,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Compose a key from its axes. Corner depths ignore `horizontal`.
    pub fn from_parts(horizontal: Horizontal, depth: Depth) -> Self {
        use Depth::*;
        use Horizontal::*;
        match (horizontal, depth) {
            (_, CornerLeft) => ZoneKey::CornerLeft,
            (_, CornerRight) => ZoneKey::CornerRight,
            (LeftWing, Deep) => ZoneKey::LeftWingDeep,
            (LeftWing, EdgeOfBox) => ZoneKey::LeftWingEdgeOfBox,
            (LeftWing, InsideBox) => ZoneKey::LeftWingInsideBox,
            (LeftWing, SixYard) => ZoneKey::LeftWingSixYard,
            (Center, Deep) => ZoneKey::CenterDeep,
            (Center, EdgeOfBox) => ZoneKey::CenterEdgeOfBox,
            (Center, InsideBox) => ZoneKey::CenterInsideBox,
            (Center, SixYard) => ZoneKey::CenterSixYard,
            (RightWing, Deep) => ZoneKey::RightWingDeep,
            (RightWing, EdgeOfBox) => ZoneKey::RightWingEdgeOfBox,
            (RightWing, InsideBox) => ZoneKey::RightWingInsideBox,
            (RightWing, SixYard) => ZoneKey::RightWingSixYard,
        }
    }

    /// Horizontal axis of the key; `None` for corners
    pub fn horizontal(&self) -> Option<Horizontal> {
        match self.index() {
            0..=3 => Some(Horizontal::LeftWing),
            4..=7 => Some(Horizontal::Center),
            8..=11 => Some(Horizontal::RightWing),
            _ => None,
        }
    }

    pub fn depth(&self) -> Depth {
        match self {
            ZoneKey::CornerLeft => Depth::CornerLeft,
            ZoneKey::CornerRight => Depth::CornerRight,
            _ => match self.index() % 4 {
                0 => Depth::Deep,
                1 => Depth::EdgeOfBox,
                2 => Depth::InsideBox,
                _ => Depth::SixYard,
            },
        }
    }

    /// Get the string key (JSON / rendering compatible)
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKey::LeftWingDeep => "left_wing-deep",
            ZoneKey::LeftWingEdgeOfBox => "left_wing-edge_of_box",
            ZoneKey::LeftWingInsideBox => "left_wing-inside_box",
            ZoneKey::LeftWingSixYard => "left_wing-six_yard",
            ZoneKey::CenterDeep => "center-deep",
            ZoneKey::CenterEdgeOfBox => "center-edge_of_box",
            ZoneKey::CenterInsideBox => "center-inside_box",
            ZoneKey::CenterSixYard => "center-six_yard",
            ZoneKey::RightWingDeep => "right_wing-deep",
            ZoneKey::RightWingEdgeOfBox => "right_wing-edge_of_box",
            ZoneKey::RightWingInsideBox => "right_wing-inside_box",
            ZoneKey::RightWingSixYard => "right_wing-six_yard",
            ZoneKey::CornerLeft => "corner_left",
            ZoneKey::CornerRight => "corner_right",
        }
    }

    /// Parse from string key
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }

    pub fn is_corner(&self) -> bool {
        self.depth().is_corner()
    }

    /// Inside the penalty area (six-yard box included)
    pub fn is_in_box(&self) -> bool {
        matches!(self.depth(), Depth::InsideBox | Depth::SixYard)
    }

    /// Whether any coordinate can classify into this key
    pub fn is_reachable(&self) -> bool {
        !matches!(self, ZoneKey::LeftWingSixYard | ZoneKey::RightWingSixYard)
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full classification of a position: key plus both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneClassification {
    pub key: ZoneKey,
    pub horizontal: Horizontal,
    pub depth: Depth,
}

/// Classify a normalized position into its zone key
pub fn classify(x: f64, y: f64) -> ZoneKey {
    classify_detailed(x, y).key
}

/// Classify a position, keeping the horizontal axis even for corners
pub fn classify_detailed(x: f64, y: f64) -> ZoneClassification {
    let horizontal = Horizontal::of(y);
    let depth = Depth::of(x, y);
    ZoneClassification { key: ZoneKey::from_parts(horizontal, depth), horizontal, depth }
}

/// Convenience wrapper over [`classify`]
pub fn classify_pos(pos: NormPos) -> ZoneKey {
    classify(pos.x, pos.y)
}
