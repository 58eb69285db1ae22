//! Mood tracking data models

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowest mood level on the rating scale
pub const MIN_LEVEL: u8 = 1;
/// Highest mood level on the rating scale
pub const MAX_LEVEL: u8 = 5;
/// Midpoint of the scale, used when there is nothing to average
pub const NEUTRAL_LEVEL: f64 = 3.0;

/// Weekdays in Monday-first order
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase name used as the weekly pattern key
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn clamp_level(level: i64) -> u8 {
    level.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as u8
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_level(raw))
}

/// A single daily mood rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecord {
    /// Day the rating applies to
    pub date: NaiveDate,
    /// Mood level 1-5, always clamped
    #[serde(deserialize_with = "deserialize_level")]
    level: u8,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
}

impl MoodRecord {
    /// Create a record, clamping `level` into 1..=5
    pub fn new(date: NaiveDate, level: i64, note: Option<String>) -> Self {
        Self {
            date,
            level: clamp_level(level),
            note,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: i64) {
        self.level = clamp_level(level);
    }

    pub fn category(&self) -> MoodCategory {
        MoodCategory::of(self.level)
    }
}

/// Classification of a single day's mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    /// Level 4 or 5
    Positive,
    /// Level 1 or 2
    Negative,
    /// Exactly 3
    #[default]
    Neutral,
}

impl MoodCategory {
    pub fn of(level: u8) -> Self {
        if level >= 4 {
            Self::Positive
        } else if level <= 2 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Streak statistics over a mood series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    pub max_positive_streak: u32,
    pub max_negative_streak: u32,
    /// Length of the run of same-category days ending at the latest record
    pub current_streak: u32,
    pub current_streak_kind: MoodCategory,
}

/// Average mood per weekday ("monday" -> 3.5). Weekdays without data are absent.
///
/// Serializes as a map in Monday-first order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPattern(HashMap<String, f64>);

impl Serialize for WeeklyPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (day, average) in self.iter() {
            map.serialize_entry(day_name(day), &average)?;
        }
        map.end()
    }
}

impl WeeklyPattern {
    pub(crate) fn insert(&mut self, day: Weekday, average: f64) {
        self.0.insert(day_name(day).to_string(), average);
    }

    /// Average for a weekday, if any record fell on it
    pub fn get(&self, day: Weekday) -> Option<f64> {
        self.0.get(day_name(day)).copied()
    }

    /// Lookup by the lowercase weekday key
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        self.0.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Days with data, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        WEEKDAYS
            .iter()
            .filter_map(move |day| self.get(*day).map(|avg| (*day, avg)))
    }

    /// Highest-average weekday; the earliest day in the week wins ties
    pub fn best_day(&self) -> Option<(Weekday, f64)> {
        self.iter().fold(None, |best, (day, avg)| match best {
            Some((_, best_avg)) if avg <= best_avg => best,
            _ => Some((day, avg)),
        })
    }

    /// Lowest-average weekday; the earliest day in the week wins ties
    pub fn worst_day(&self) -> Option<(Weekday, f64)> {
        self.iter().fold(None, |worst, (day, avg)| match worst {
            Some((_, worst_avg)) if avg >= worst_avg => worst,
            _ => Some((day, avg)),
        })
    }
}

/// Computed mood statistics (not stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub average_level: f64,
    /// Least-squares slope of level against entry index
    pub trend_slope: f64,
    /// Dispersion normalized to 0-100
    pub volatility_score: f64,
    /// Number of adjacent entries whose level differs
    pub transition_count: u32,
    pub weekly_pattern: WeeklyPattern,
    pub streaks: StreakInfo,
}

impl Default for MoodAnalysis {
    fn default() -> Self {
        Self {
            average_level: NEUTRAL_LEVEL,
            trend_slope: 0.0,
            volatility_score: 0.0,
            transition_count: 0,
            weekly_pattern: WeeklyPattern::default(),
            streaks: StreakInfo::default(),
        }
    }
}
