//! Match event model
//!
//! Events arrive as JSON records tagged by `type` with camelCase fields.
//! Each type is its own variant so classifiers match exhaustively instead of
//! probing optional fields.
//!
//! Decoding is lenient: missing or `null` numbers become 0, numeric strings
//! are parsed, negative or fractional minutes are floored into range, and an
//! unknown shot outcome is dropped rather than failing the record.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::coordinates::NormPos;

/// Fields shared by every event type
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventBase {
    /// Match minute (0-120)
    #[serde(default, deserialize_with = "lenient::minute")]
    pub minute: u32,
    /// Origin X, normalized 0-100 along the pitch length
    #[serde(default, deserialize_with = "lenient::number")]
    pub x: f64,
    /// Origin Y, normalized 0-100 across the pitch width
    #[serde(default, deserialize_with = "lenient::number")]
    pub y: f64,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    /// Acting player id
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl EventBase {
    pub fn new(minute: u32, x: f64, y: f64, success: bool) -> Self {
        Self { minute, x, y, success, player: None, player_name: None }
    }

    pub fn with_player(mut self, id: impl Into<String>) -> Self {
        self.player = Some(id.into());
        self
    }

    pub fn origin(&self) -> NormPos {
        NormPos::new(self.x, self.y)
    }
}

/// Pass with destination and receiver
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(default, deserialize_with = "lenient::number")]
    pub target_x: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub target_y: f64,
    /// Receiving player id
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "Option::is_none")]
    pub pass_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_target_name: Option<String>,
}

impl PassEvent {
    pub fn new(base: EventBase, target_x: f64, target_y: f64) -> Self {
        Self { base, target_x, target_y, pass_target: None, pass_target_name: None }
    }

    pub fn with_receiver(mut self, id: impl Into<String>) -> Self {
        self.pass_target = Some(id.into());
        self
    }

    pub fn target(&self) -> NormPos {
        NormPos::new(self.target_x, self.target_y)
    }

    /// Forward progress in normalized X units
    pub fn progress(&self) -> f64 {
        self.target_x - self.base.x
    }
}

/// Shot outcome as recorded by the data provider
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Goal,
    Saved,
    Missed,
    Blocked,
}

impl ShotOutcome {
    pub const ALL: [ShotOutcome; 4] =
        [ShotOutcome::Goal, ShotOutcome::Saved, ShotOutcome::Missed, ShotOutcome::Blocked];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goal" => Some(ShotOutcome::Goal),
            "saved" => Some(ShotOutcome::Saved),
            "missed" => Some(ShotOutcome::Missed),
            "blocked" => Some(ShotOutcome::Blocked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotOutcome::Goal => "goal",
            ShotOutcome::Saved => "saved",
            ShotOutcome::Missed => "missed",
            ShotOutcome::Blocked => "blocked",
        }
    }
}

/// Shot with optional provider xG
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShotEvent {
    #[serde(flatten)]
    pub base: EventBase,
    #[serde(default, deserialize_with = "lenient::number")]
    pub target_x: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub target_y: f64,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_goal: bool,
    #[serde(default, deserialize_with = "lenient::outcome", skip_serializing_if = "Option::is_none")]
    pub shot_outcome: Option<ShotOutcome>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_big_chance: bool,
    /// Provider xG; the proxy model fills in when absent
    #[serde(rename = "xG", default, deserialize_with = "lenient::opt_number", skip_serializing_if = "Option::is_none")]
    pub xg: Option<f64>,
}

impl ShotEvent {
    pub fn new(base: EventBase) -> Self {
        let (target_x, target_y) = (base.x, base.y);
        Self {
            base,
            target_x,
            target_y,
            is_goal: false,
            shot_outcome: None,
            is_big_chance: false,
            xg: None,
        }
    }

    pub fn with_outcome(mut self, outcome: ShotOutcome) -> Self {
        self.shot_outcome = Some(outcome);
        self.is_goal = self.is_goal || outcome == ShotOutcome::Goal;
        self
    }

    /// Goal flag or goal outcome
    pub fn scored(&self) -> bool {
        self.is_goal || self.shot_outcome == Some(ShotOutcome::Goal)
    }

    /// Goal or saved; blocked and missed shots are off target
    pub fn on_target(&self) -> bool {
        self.scored() || self.shot_outcome == Some(ShotOutcome::Saved)
    }

    /// Outcome with the goal flag folded in
    pub fn resolved_outcome(&self) -> Option<ShotOutcome> {
        if self.scored() {
            Some(ShotOutcome::Goal)
        } else {
            self.shot_outcome
        }
    }
}

/// Event enumeration - closed set of observed actions
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    Pass(PassEvent),
    Shot(ShotEvent),
    Dribble(EventBase),
    Interception(EventBase),
    Tackle(EventBase),
}

/// Data-free discriminant of [`MatchEvent`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Pass,
    Shot,
    Dribble,
    Interception,
    Tackle,
}

impl MatchEvent {
    pub fn base(&self) -> &EventBase {
        match self {
            MatchEvent::Pass(p) => &p.base,
            MatchEvent::Shot(s) => &s.base,
            MatchEvent::Dribble(b) | MatchEvent::Interception(b) | MatchEvent::Tackle(b) => b,
        }
    }

    pub fn base_mut(&mut self) -> &mut EventBase {
        match self {
            MatchEvent::Pass(p) => &mut p.base,
            MatchEvent::Shot(s) => &mut s.base,
            MatchEvent::Dribble(b) | MatchEvent::Interception(b) | MatchEvent::Tackle(b) => b,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            MatchEvent::Pass(_) => EventKind::Pass,
            MatchEvent::Shot(_) => EventKind::Shot,
            MatchEvent::Dribble(_) => EventKind::Dribble,
            MatchEvent::Interception(_) => EventKind::Interception,
            MatchEvent::Tackle(_) => EventKind::Tackle,
        }
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.base().minute
    }

    #[inline]
    pub fn success(&self) -> bool {
        self.base().success
    }

    pub fn player(&self) -> Option<&str> {
        self.base().player.as_deref()
    }

    pub fn origin(&self) -> NormPos {
        self.base().origin()
    }

    /// Destination for directional events, origin otherwise
    pub fn target(&self) -> NormPos {
        match self {
            MatchEvent::Pass(p) => p.target(),
            MatchEvent::Shot(s) => NormPos::new(s.target_x, s.target_y),
            _ => self.origin(),
        }
    }

    pub fn as_pass(&self) -> Option<&PassEvent> {
        match self {
            MatchEvent::Pass(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_shot(&self) -> Option<&ShotEvent> {
        match self {
            MatchEvent::Shot(s) => Some(s),
            _ => None,
        }
    }
}

/// Lenient field decoders for loosely typed upstream records
mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Number(f64),
        Text(String),
        Flag(bool),
    }

    impl Scalar {
        fn as_f64(&self) -> f64 {
            match self {
                Scalar::Number(n) if n.is_finite() => *n,
                Scalar::Number(_) => 0.0,
                Scalar::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0),
                Scalar::Flag(b) => f64::from(u8::from(*b)),
            }
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<Scalar>::deserialize(d)?.map(|s| s.as_f64()).unwrap_or(0.0))
    }

    /// Like `number`, but unreadable and non-finite values become `None`
    pub fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(Option::<Scalar>::deserialize(d)?.and_then(|s| match s {
            Scalar::Number(n) => Some(n),
            Scalar::Text(t) => t.trim().parse::<f64>().ok(),
            Scalar::Flag(_) => None,
        })
        .filter(|n| n.is_finite()))
    }

    pub fn minute<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let raw = number(d)?;
        Ok(raw.floor().clamp(0.0, u32::MAX as f64) as u32)
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Flag(b)) => b,
            Some(Scalar::Number(n)) => n != 0.0,
            Some(Scalar::Text(s)) => matches!(s.trim(), "true" | "1"),
            None => false,
        })
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Scalar>::deserialize(d)? {
            Some(Scalar::Text(s)) if !s.trim().is_empty() => Some(s),
            Some(Scalar::Number(n)) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
            Some(Scalar::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn outcome<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ShotOutcome>, D::Error> {
        Ok(Option::<String>::deserialize(d)?.as_deref().and_then(ShotOutcome::parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_decodes_camel_case() {
        let json = r#"{"type":"pass","minute":12,"x":40,"y":55.5,"targetX":60,"targetY":50,
                       "success":true,"passTarget":"p9","passTargetName":"Nine"}"#;
        let ev: MatchEvent = serde_json::from_str(json).unwrap();
        let pass = ev.as_pass().expect("pass");
        assert_eq!(pass.base.minute, 12);
        assert_eq!(pass.base.y, 55.5);
        assert_eq!(pass.target(), NormPos::new(60.0, 50.0));
        assert_eq!(pass.pass_target.as_deref(), Some("p9"));
        assert!(ev.success());
        assert_eq!(ev.kind(), EventKind::Pass);
    }

    #[test]
    fn test_missing_and_null_numbers_default_to_zero() {
        let json = r#"{"type":"pass","minute":null,"x":70,"y":50,"success":true}"#;
        let ev: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev.minute(), 0);
        assert_eq!(ev.target(), NormPos::new(0.0, 0.0));
    }

    #[test]
    fn test_minute_is_floored_into_range() {
        let ev: MatchEvent = serde_json::from_str(r#"{"type":"tackle","minute":-4,"x":1,"y":2}"#).unwrap();
        assert_eq!(ev.minute(), 0);
        let ev: MatchEvent = serde_json::from_str(r#"{"type":"tackle","minute":44.9,"x":1,"y":2}"#).unwrap();
        assert_eq!(ev.minute(), 44);
    }

    #[test]
    fn test_numeric_strings_and_ids() {
        let json = r#"{"type":"dribble","minute":"33","x":"12.5","y":20,"player":7,"success":1}"#;
        let ev: MatchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev.minute(), 33);
        assert_eq!(ev.origin().x, 12.5);
        assert_eq!(ev.player(), Some("7"));
        assert!(ev.success());
        // Non-directional events target their origin
        assert_eq!(ev.target(), ev.origin());
    }

    #[test]
    fn test_shot_goal_resolution() {
        let json = r#"{"type":"shot","minute":10,"x":90,"y":50,"success":true,"isGoal":true}"#;
        let ev: MatchEvent = serde_json::from_str(json).unwrap();
        let shot = ev.as_shot().unwrap();
        assert!(shot.scored());
        assert!(shot.on_target());
        assert_eq!(shot.resolved_outcome(), Some(ShotOutcome::Goal));

        let json = r#"{"type":"shot","minute":10,"x":90,"y":50,"shotOutcome":"goal","xG":0.31}"#;
        let shot: MatchEvent = serde_json::from_str(json).unwrap();
        assert!(shot.as_shot().unwrap().scored());
        assert_eq!(shot.as_shot().unwrap().xg, Some(0.31));
    }

    #[test]
    fn test_provider_xg_accepts_numeric_strings() {
        let xg = |raw: &str| {
            let json = format!(r#"{{"type":"shot","minute":10,"x":90,"y":50,"xG":{}}}"#, raw);
            let ev: MatchEvent = serde_json::from_str(&json).unwrap();
            ev.as_shot().unwrap().xg
        };
        assert_eq!(xg(r#""0.12""#), Some(0.12));
        assert_eq!(xg(r#"" 0.4 ""#), Some(0.4));
        assert_eq!(xg("null"), None);
        assert_eq!(xg(r#""n/a""#), None);
        assert_eq!(xg(r#""NaN""#), None);
        assert_eq!(xg("true"), None);
    }

    #[test]
    fn test_unknown_shot_outcome_is_dropped() {
        let json = r#"{"type":"shot","minute":3,"x":80,"y":40,"shotOutcome":"post"}"#;
        let ev: MatchEvent = serde_json::from_str(json).unwrap();
        let shot = ev.as_shot().unwrap();
        assert_eq!(shot.shot_outcome, None);
        assert!(!shot.on_target());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let res: Result<MatchEvent, _> = serde_json::from_str(r#"{"type":"foul","minute":3,"x":1,"y":1}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serialize_keeps_wire_names() {
        let shot = MatchEvent::Shot(ShotEvent {
            xg: Some(0.2),
            ..ShotEvent::new(EventBase::new(5, 88.0, 50.0, true))
        });
        let value = serde_json::to_value(&shot).unwrap();
        assert_eq!(value["type"], "shot");
        assert_eq!(value["xG"], 0.2);
        assert_eq!(value["isBigChance"], false);
        assert!(value.get("shotOutcome").is_none());
    }
}
