//! Composite wellness score

use crate::mood::series::{average, volatility};
use crate::mood::MoodRecord;

use super::errors::{AnalysisError, Result};
use super::models::WellnessBreakdown;

const MOOD_WEIGHT: f64 = 40.0;
const CONSISTENCY_WEIGHT: f64 = 30.0;
const ENGAGEMENT_WEIGHT: f64 = 20.0;
const JOURNAL_WEIGHT: f64 = 10.0;

/// Mood entries needed for full engagement credit
const ENGAGEMENT_TARGET: f64 = 30.0;
/// Journal entries needed for full journaling credit
const JOURNAL_TARGET: f64 = 10.0;

/// Split the score into its weighted components
pub fn score_breakdown(
    average_level: f64,
    volatility_score: f64,
    total_mood_entries: usize,
    total_journal_entries: usize,
) -> WellnessBreakdown {
    let mood = (average_level / 5.0) * MOOD_WEIGHT;
    let consistency = ((100.0 - volatility_score) / 100.0).max(0.0) * CONSISTENCY_WEIGHT;
    let engagement = (total_mood_entries as f64 / ENGAGEMENT_TARGET).min(1.0) * ENGAGEMENT_WEIGHT;
    let journal = (total_journal_entries as f64 / JOURNAL_TARGET).min(1.0) * JOURNAL_WEIGHT;

    WellnessBreakdown {
        mood,
        consistency,
        engagement,
        journal,
        total: (mood + consistency + engagement + journal).clamp(0.0, 100.0),
    }
}

/// Composite 0-100 score for a mood series
pub fn wellness_score(
    records: &[MoodRecord],
    total_mood_entries: usize,
    total_journal_entries: usize,
) -> Result<f64> {
    if records.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "at least one mood entry is required to compute a wellness score".to_string(),
        ));
    }

    let breakdown = score_breakdown(
        average(records),
        volatility(records),
        total_mood_entries,
        total_journal_entries,
    );
    Ok(breakdown.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn series(levels: &[i64]) -> Vec<MoodRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| MoodRecord::new(start + Duration::days(i as i64), *level, None))
            .collect()
    }

    #[test]
    fn test_empty_records_rejected() {
        assert!(matches!(
            wellness_score(&[], 10, 10),
            Err(AnalysisError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_perfect_score() {
        let score = wellness_score(&series(&[5, 5, 5]), 30, 10).unwrap();
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_components() {
        let breakdown = score_breakdown(2.5, 50.0, 15, 5);
        assert!((breakdown.mood - 20.0).abs() < 1e-12);
        assert!((breakdown.consistency - 15.0).abs() < 1e-12);
        assert!((breakdown.engagement - 10.0).abs() < 1e-12);
        assert!((breakdown.journal - 5.0).abs() < 1e-12);
        assert!((breakdown.total - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_saturate() {
        let breakdown = score_breakdown(5.0, 0.0, 10_000, 10_000);
        assert!((breakdown.engagement - 20.0).abs() < 1e-12);
        assert!((breakdown.journal - 10.0).abs() < 1e-12);
        assert!(breakdown.total <= 100.0);
    }

    #[test]
    fn test_score_always_bounded() {
        for levels in [vec![1], vec![1, 5, 1, 5], vec![3, 3, 4], vec![5; 12]] {
            for (moods, journals) in [(0, 0), (1, 0), (29, 3), (500, 500)] {
                let score = wellness_score(&series(&levels), moods, journals).unwrap();
                assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
            }
        }
    }
}
