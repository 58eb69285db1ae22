//! Threshold-based recommendations

use super::models::{Priority, Recommendation, RecommendationKind};

/// Average below which professional help is suggested
pub const LOW_MOOD_THRESHOLD: f64 = 2.5;
/// Volatility above which mindfulness is suggested
pub const HIGH_VOLATILITY_THRESHOLD: f64 = 60.0;
/// Average at or above which current habits are affirmed
pub const HIGH_MOOD_THRESHOLD: f64 = 4.0;

/// Evaluate every rule independently, in a fixed order
pub fn recommend(average_level: f64, volatility_score: f64, journal_count: usize) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if average_level < LOW_MOOD_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Professional,
            "Professional consultation",
            "Consider reaching out to a mental health professional",
            Priority::High,
        ));
    }

    if volatility_score > HIGH_VOLATILITY_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Mindfulness,
            "Emotional stability",
            "Practice daily meditation to reduce emotional volatility",
            Priority::Medium,
        ));
    }

    if journal_count == 0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::Lifestyle,
            "Start journaling",
            "Keep a journal to better understand your emotional patterns",
            Priority::Low,
        ));
    }

    if average_level >= HIGH_MOOD_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Activity,
            "Keep it up",
            "Maintain the current habits that seem to be working well",
            Priority::Low,
        ));
    }

    recommendations
}
