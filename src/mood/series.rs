//! Statistics over a series of mood records
//!
//! Every function here is total: records may arrive in any order and are
//! sorted internally where ordering matters. Empty or too-short inputs yield
//! neutral values instead of errors.

use std::collections::HashMap;

use chrono::{Datelike, Weekday};

use super::models::*;

fn sorted_ascending(records: &[MoodRecord]) -> Vec<&MoodRecord> {
    let mut sorted: Vec<&MoodRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

fn sorted_descending(records: &[MoodRecord]) -> Vec<&MoodRecord> {
    let mut sorted: Vec<&MoodRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Arithmetic mean of levels, 3.0 for an empty series
pub fn average(records: &[MoodRecord]) -> f64 {
    if records.is_empty() {
        return NEUTRAL_LEVEL;
    }
    let total: u32 = records.iter().map(|r| r.level() as u32).sum();
    total as f64 / records.len() as f64
}

/// Ordinary least-squares slope of level against position in date order.
///
/// The x axis is the entry index `0..n-1`, so gaps between dates do not
/// change the result.
pub fn trend_slope(records: &[MoodRecord]) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }

    let sorted = sorted_ascending(records);
    let n = sorted.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);

    for (i, record) in sorted.iter().enumerate() {
        let x = i as f64;
        let y = record.level() as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}

/// Population standard deviation scaled to 0-100.
///
/// 2.0 is the largest standard deviation possible on a 1-5 scale.
pub fn volatility(records: &[MoodRecord]) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }

    let mean = average(records);
    let sum_squared_diffs: f64 = records
        .iter()
        .map(|r| (r.level() as f64 - mean).powi(2))
        .sum();
    let std_dev = (sum_squared_diffs / records.len() as f64).sqrt();

    (std_dev / 2.0 * 100.0).min(100.0)
}

/// Number of adjacent (date-ordered) entries whose levels differ
pub fn transition_count(records: &[MoodRecord]) -> u32 {
    sorted_ascending(records)
        .windows(2)
        .filter(|pair| pair[0].level() != pair[1].level())
        .count() as u32
}

/// Average level per weekday; weekdays without records are omitted
pub fn weekly_pattern(records: &[MoodRecord]) -> WeeklyPattern {
    let mut totals: HashMap<Weekday, (u32, u32)> = HashMap::new();

    for record in records {
        let entry = totals.entry(record.date.weekday()).or_insert((0, 0));
        entry.0 += record.level() as u32;
        entry.1 += 1;
    }

    let mut pattern = WeeklyPattern::default();
    for (day, (total, count)) in totals {
        pattern.insert(day, total as f64 / count as f64);
    }
    pattern
}

/// Longest positive/negative runs and the run ending at the latest record.
///
/// Runs are measured over the series in most-recent-first order.
pub fn streaks(records: &[MoodRecord]) -> StreakInfo {
    let sorted = sorted_descending(records);
    let Some(latest) = sorted.first() else {
        return StreakInfo::default();
    };

    let mut max_positive = 0u32;
    let mut max_negative = 0u32;
    let mut positive_run = 0u32;
    let mut negative_run = 0u32;

    for record in &sorted {
        match record.category() {
            MoodCategory::Positive => {
                positive_run += 1;
                negative_run = 0;
                max_positive = max_positive.max(positive_run);
            }
            MoodCategory::Negative => {
                negative_run += 1;
                positive_run = 0;
                max_negative = max_negative.max(negative_run);
            }
            MoodCategory::Neutral => {
                positive_run = 0;
                negative_run = 0;
            }
        }
    }

    let current_kind = latest.category();
    let current_streak = sorted
        .iter()
        .take_while(|r| r.category() == current_kind)
        .count() as u32;

    StreakInfo {
        max_positive_streak: max_positive,
        max_negative_streak: max_negative,
        current_streak,
        current_streak_kind: current_kind,
    }
}

/// Compute every series statistic in one pass over the input
pub fn analyze_series(records: &[MoodRecord]) -> MoodAnalysis {
    if records.is_empty() {
        return MoodAnalysis::default();
    }

    MoodAnalysis {
        average_level: average(records),
        trend_slope: trend_slope(records),
        volatility_score: volatility(records),
        transition_count: transition_count(records),
        weekly_pattern: weekly_pattern(records),
        streaks: streaks(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// Records on consecutive days starting 2024-01-01 (a Monday), oldest first
    fn series(levels: &[i64]) -> Vec<MoodRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| MoodRecord::new(start + Duration::days(i as i64), *level, None))
            .collect()
    }

    /// Records given most-recent first
    fn recent_first(levels: &[i64]) -> Vec<MoodRecord> {
        let newest = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| MoodRecord::new(newest - Duration::days(i as i64), *level, None))
            .collect()
    }

    #[test]
    fn test_average_empty_is_neutral() {
        assert_eq!(average(&[]), 3.0);
    }

    #[test]
    fn test_average_stays_on_scale() {
        for levels in [vec![1, 1, 1], vec![5, 5], vec![1, 5, 3, 2], vec![4]] {
            let avg = average(&series(&levels));
            assert!((1.0..=5.0).contains(&avg), "average {} off scale", avg);
        }
    }

    #[test]
    fn test_trend_slope_increasing_is_positive() {
        assert!(trend_slope(&series(&[1, 2, 3, 4, 5])) > 0.0);
        assert!(trend_slope(&series(&[2, 3])) > 0.0);
    }

    #[test]
    fn test_trend_slope_constant_is_zero() {
        assert_eq!(trend_slope(&series(&[4, 4, 4, 4])), 0.0);
    }

    #[test]
    fn test_trend_slope_too_few_points() {
        assert_eq!(trend_slope(&[]), 0.0);
        assert_eq!(trend_slope(&series(&[5])), 0.0);
    }

    #[test]
    fn test_trend_slope_ignores_input_order() {
        let mut records = series(&[1, 2, 3, 4, 5]);
        records.reverse();
        assert!((trend_slope(&records) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_slope_ignores_calendar_gaps() {
        let d = |y, m, dd| NaiveDate::from_ymd_opt(y, m, dd).unwrap();
        let spread = vec![
            MoodRecord::new(d(2024, 1, 1), 1, None),
            MoodRecord::new(d(2024, 2, 15), 2, None),
            MoodRecord::new(d(2024, 9, 30), 3, None),
        ];
        assert!((trend_slope(&spread) - trend_slope(&series(&[1, 2, 3]))).abs() < 1e-12);
    }

    #[test]
    fn test_volatility_constant_is_zero() {
        assert_eq!(volatility(&series(&[3, 3, 3, 3])), 0.0);
    }

    #[test]
    fn test_volatility_alternating_extremes() {
        let score = volatility(&series(&[1, 5, 1, 5, 1, 5]));
        assert!(score <= 100.0);
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_single_record() {
        assert_eq!(volatility(&series(&[1])), 0.0);
    }

    #[test]
    fn test_transition_count() {
        assert_eq!(transition_count(&series(&[3, 3, 4, 4, 2, 3])), 3);
        assert_eq!(transition_count(&series(&[3])), 0);
        assert_eq!(transition_count(&[]), 0);
    }

    #[test]
    fn test_weekly_pattern_omits_missing_days() {
        // Mon, Tue, Wed, then next Mon
        let records = series(&[2, 4, 5, 0, 0, 0, 0, 4]);
        let records: Vec<MoodRecord> = records
            .into_iter()
            .enumerate()
            .filter(|(i, _)| ![3, 4, 5, 6].contains(i))
            .map(|(_, r)| r)
            .collect();

        let pattern = weekly_pattern(&records);
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.get(Weekday::Mon), Some(3.0));
        assert_eq!(pattern.get(Weekday::Tue), Some(4.0));
        assert_eq!(pattern.get(Weekday::Wed), Some(5.0));
        assert_eq!(pattern.get(Weekday::Thu), None);
        assert_eq!(pattern.get(Weekday::Sun), None);
    }

    #[test]
    fn test_streaks_reference_sequence() {
        let info = streaks(&recent_first(&[5, 5, 5, 2, 2, 4]));
        assert_eq!(info.max_positive_streak, 3);
        assert_eq!(info.max_negative_streak, 2);
        assert_eq!(info.current_streak, 3);
        assert_eq!(info.current_streak_kind, MoodCategory::Positive);
    }

    #[test]
    fn test_streaks_neutral_resets_runs() {
        let info = streaks(&recent_first(&[3, 3, 4, 4, 3, 4, 1]));
        assert_eq!(info.max_positive_streak, 2);
        assert_eq!(info.max_negative_streak, 1);
        assert_eq!(info.current_streak, 2);
        assert_eq!(info.current_streak_kind, MoodCategory::Neutral);
    }

    #[test]
    fn test_streaks_sorts_before_scanning() {
        let mut records = recent_first(&[1, 2, 2, 5]);
        records.reverse();
        let info = streaks(&records);
        assert_eq!(info.current_streak, 3);
        assert_eq!(info.current_streak_kind, MoodCategory::Negative);
        assert_eq!(info.max_negative_streak, 3);
        assert_eq!(info.max_positive_streak, 1);
    }

    #[test]
    fn test_streaks_empty() {
        assert_eq!(streaks(&[]), StreakInfo::default());
        assert_eq!(StreakInfo::default().current_streak_kind, MoodCategory::Neutral);
    }

    #[test]
    fn test_week_scenario() {
        let records = series(&[3, 4, 2, 3, 4, 5, 4]);
        let analysis = analyze_series(&records);

        assert!((analysis.average_level - 25.0 / 7.0).abs() < 1e-12);
        assert!((analysis.trend_slope - 0.25).abs() < 1e-12);
        assert!(analysis.volatility_score > 0.0);
        assert_eq!(analysis.transition_count, 6);
        assert_eq!(analysis.weekly_pattern.len(), 7);
    }

    #[test]
    fn test_analyze_series_does_not_mutate_input() {
        let records = recent_first(&[2, 4, 3]);
        let before = records.clone();
        let _ = analyze_series(&records);
        assert_eq!(records, before);
    }
}
