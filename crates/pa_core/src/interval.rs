//! Match time intervals
//!
//! Intervals are half-open `[start, end)` in whole minutes, so an event at
//! minute 10 belongs to 10-20 and not to 0-10. The "all" interval runs to
//! 121 so that a 120th-minute event is still included.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::pitch_constants::clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalCategory {
    All,
    TenMinute,
    Half,
    Overtime,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: u32,
    pub end: u32,
    pub label: String,
    pub category: IntervalCategory,
}

impl TimeInterval {
    pub fn new(start: u32, end: u32, label: impl Into<String>, category: IntervalCategory) -> Self {
        Self { start, end, label: label.into(), category }
    }

    /// Whole match including extra time
    pub fn all() -> Self {
        Self::new(0, clock::MAX_MINUTE + 1, "All", IntervalCategory::All)
    }

    /// 0-10, 10-20, ... 80-90
    pub fn ten_minute_buckets() -> Vec<Self> {
        (0..clock::FULL_TIME)
            .step_by(10)
            .map(|start| Self::new(start, start + 10, format!("{}-{}", start, start + 10), IntervalCategory::TenMinute))
            .collect()
    }

    pub fn first_half() -> Self {
        Self::new(0, clock::HALF_TIME, "1st Half", IntervalCategory::Half)
    }

    pub fn second_half() -> Self {
        Self::new(clock::HALF_TIME, clock::FULL_TIME, "2nd Half", IntervalCategory::Half)
    }

    pub fn halves() -> [Self; 2] {
        [Self::first_half(), Self::second_half()]
    }

    pub fn overtime() -> Self {
        Self::new(clock::FULL_TIME, clock::MAX_MINUTE + 1, "Overtime", IntervalCategory::Overtime)
    }

    /// All, the ten-minute buckets, both halves and overtime, in display order
    pub fn standard_set() -> Vec<Self> {
        let mut set = vec![Self::all()];
        set.extend(Self::ten_minute_buckets());
        set.extend(Self::halves());
        set.push(Self::overtime());
        set
    }

    /// Parse `all`, `first_half`, `second_half`, `overtime` or a `start-end`
    /// minute range.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "all" => return Ok(Self::all()),
            "first_half" | "1h" => return Ok(Self::first_half()),
            "second_half" | "2h" => return Ok(Self::second_half()),
            "overtime" | "et" => return Ok(Self::overtime()),
            _ => {}
        }

        let invalid = |reason: &str| AnalysisError::InvalidConfig(format!("interval '{}': {}", s, reason));
        let (start, end) = s.split_once('-').ok_or_else(|| invalid("expected start-end"))?;
        let start: u32 = start.trim().parse().map_err(|_| invalid("start is not a minute"))?;
        let end: u32 = end.trim().parse().map_err(|_| invalid("end is not a minute"))?;
        if end <= start {
            return Err(invalid("end must be after start"));
        }

        let category = if end - start == 10 && start % 10 == 0 && end <= clock::FULL_TIME {
            IntervalCategory::TenMinute
        } else {
            IntervalCategory::Custom
        };
        Ok(Self::new(start, end, format!("{}-{}", start, end), category))
    }

    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start && minute < self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.label, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_boundaries() {
        let buckets = TimeInterval::ten_minute_buckets();
        assert_eq!(buckets.len(), 9);
        assert!(!buckets[0].contains(10));
        assert!(buckets[1].contains(10));
        assert!(buckets[8].contains(89));
        assert!(!buckets[8].contains(90));
        assert_eq!(buckets[3].label, "30-40");
    }

    #[test]
    fn test_all_and_overtime_include_minute_120() {
        assert!(TimeInterval::all().contains(0));
        assert!(TimeInterval::all().contains(120));
        assert!(TimeInterval::overtime().contains(120));
        assert!(TimeInterval::overtime().contains(90));
        assert!(!TimeInterval::overtime().contains(89));
    }

    #[test]
    fn test_halves_split_at_45() {
        let [first, second] = TimeInterval::halves();
        assert!(first.contains(44));
        assert!(!first.contains(45));
        assert!(second.contains(45));
        assert!(!second.contains(90));
    }

    #[test]
    fn test_standard_set_order() {
        let set = TimeInterval::standard_set();
        assert_eq!(set.len(), 13);
        assert_eq!(set[0].category, IntervalCategory::All);
        assert_eq!(set[12].category, IntervalCategory::Overtime);
    }

    #[test]
    fn test_parse() {
        assert_eq!(TimeInterval::parse("all").unwrap(), TimeInterval::all());
        assert_eq!(TimeInterval::parse("Second_Half").unwrap(), TimeInterval::second_half());
        assert_eq!(TimeInterval::parse("overtime").unwrap(), TimeInterval::overtime());

        let bucket = TimeInterval::parse("10-20").unwrap();
        assert_eq!((bucket.start, bucket.end), (10, 20));
        assert_eq!(bucket.category, IntervalCategory::TenMinute);

        let custom = TimeInterval::parse(" 60 - 75 ").unwrap();
        assert_eq!(custom.category, IntervalCategory::Custom);
        assert_eq!(custom.duration(), 15);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "ten", "20-10", "5-5", "a-b", "-3"] {
            assert!(TimeInterval::parse(bad).is_err(), "{bad} should not parse");
        }
    }
}
