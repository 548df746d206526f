use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;

/// Trip length clamped into `MIN_DAYS..=MAX_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayCount(u32);

impl DayCount {
    pub fn new(days: i64) -> Self {
        let clamped = days.clamp(i64::from(MIN_DAYS), i64::from(MAX_DAYS));
        // clamp keeps the value inside u32 range
        Self(clamped as u32)
    }

    /// Parse free-form user input. Anything that is not an integer counts as one day.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(days) => Self::new(days),
            Err(_) => Self::default(),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self(MIN_DAYS)
    }
}

impl From<i64> for DayCount {
    fn from(days: i64) -> Self {
        Self::new(days)
    }
}

impl From<Option<i64>> for DayCount {
    fn from(days: Option<i64>) -> Self {
        days.map(Self::new).unwrap_or_default()
    }
}

/// Traveler preferences as supplied by the caller, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    pub destination: String,
    pub days: i64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub guardrails: Vec<String>,
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, days: i64) -> Self {
        Self {
            destination: destination.into(),
            days,
            interests: Vec::new(),
            guardrails: Vec::new(),
        }
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_guardrails<I, S>(mut self, guardrails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guardrails = guardrails.into_iter().map(Into::into).collect();
        self
    }

    pub fn day_count(&self) -> DayCount {
        DayCount::new(self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_count_clamps_out_of_range_values() {
        assert_eq!(DayCount::new(0).get(), 1);
        assert_eq!(DayCount::new(-5).get(), 1);
        assert_eq!(DayCount::new(45).get(), 30);
        assert_eq!(DayCount::new(i64::MAX).get(), 30);
        assert_eq!(DayCount::new(12).get(), 12);
    }

    #[test]
    fn test_day_count_parse_defaults_non_numeric_to_one() {
        assert_eq!(DayCount::parse("abc").get(), 1);
        assert_eq!(DayCount::parse("").get(), 1);
        assert_eq!(DayCount::parse("2.5").get(), 1);
        assert_eq!(DayCount::parse(" 7 ").get(), 7);
        assert_eq!(DayCount::parse("99").get(), 30);
    }

    #[test]
    fn test_missing_day_count_defaults_to_one() {
        assert_eq!(DayCount::from(None).get(), 1);
        assert_eq!(DayCount::from(Some(4)).get(), 4);
    }
}
