//! Human-readable renderings of analysis results

use crate::journal::{SentimentClass, SentimentReport};
use crate::mood::series::{average, trend_slope, weekly_pattern};
use crate::mood::{day_name, MoodAnalysis, MoodRecord};

use super::forecast::{trend_kind, INSUFFICIENT_LABEL, MIN_FORECAST_RECORDS};
use super::models::ForecastResult;
use super::recommendations::{HIGH_VOLATILITY_THRESHOLD, LOW_MOOD_THRESHOLD};

/// Records needed before weekday patterns are reported
pub const MIN_TEMPORAL_RECORDS: usize = 7;

const MODERATE_MOOD_THRESHOLD: f64 = 3.5;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn trend_text(records: &[MoodRecord]) -> String {
    if records.is_empty() {
        return "No mood data available for trend analysis.".to_string();
    }

    let slope = trend_slope(records);
    format!(
        "Over {} days: average mood {:.1}/5, {} trend (slope: {:.3})",
        records.len(),
        average(records),
        trend_kind(slope).as_str(),
        slope
    )
}

/// Best and most difficult weekday
pub fn temporal_text(records: &[MoodRecord]) -> String {
    if records.len() < MIN_TEMPORAL_RECORDS {
        return format!(
            "Not enough data for temporal analysis (minimum {} days).",
            MIN_TEMPORAL_RECORDS
        );
    }

    let pattern = weekly_pattern(records);
    match (pattern.best_day(), pattern.worst_day()) {
        (Some((best, best_avg)), Some((worst, worst_avg))) => format!(
            "Patterns detected: best day {} ({:.1}/5), difficult day {} ({:.1}/5)",
            capitalize(day_name(best)),
            best_avg,
            capitalize(day_name(worst)),
            worst_avg
        ),
        _ => "Patterns detected: none".to_string(),
    }
}

pub fn sentiment_text(report: &SentimentReport) -> String {
    if report.classification == SentimentClass::NoData {
        return "No journal entries available for sentiment analysis.".to_string();
    }

    format!(
        "Analysis of {} entries: {} sentiment ({:.0}% positive, {:.0}% negative)",
        report.total_entries,
        report.classification.label(),
        report.positive_ratio * 100.0,
        report.negative_ratio * 100.0
    )
}

pub fn forecast_text(forecast: &ForecastResult) -> String {
    if forecast.horizon_label == INSUFFICIENT_LABEL {
        return format!(
            "Forecast: insufficient data (minimum {} days required)",
            MIN_FORECAST_RECORDS
        );
    }

    format!(
        "3-day forecast: {:.1}/5 (confidence {:.0}%) - trend: {}",
        forecast.predicted_level,
        forecast.confidence * 100.0,
        forecast.trend_kind.as_str()
    )
}

/// Bulleted advice list, broader than the structured recommendations
pub fn advice_text(analysis: &MoodAnalysis, journal_count: usize) -> String {
    let mut lines = vec!["Personalized recommendations:".to_string(), String::new()];
    let mut bullet = |text: &str| lines.push(format!("\u{2022} {}", text));

    let avg = analysis.average_level;
    if avg < LOW_MOOD_THRESHOLD {
        bullet("Consider talking to a mental health professional");
        bullet("Make time for activities that bring you joy");
    } else if avg < MODERATE_MOOD_THRESHOLD {
        bullet("Add relaxation exercises to your routine");
        bullet("Reach out to the people close to you");
    } else {
        bullet("Keep up your current positive habits");
        bullet("Explore new, enriching activities");
    }

    if analysis.volatility_score > HIGH_VOLATILITY_THRESHOLD {
        bullet("Work on keeping a regular daily routine");
        bullet("Practice meditation to steady your emotions");
    }

    if journal_count == 0 {
        bullet("Start a journal to better understand your emotions");
    }

    lines.join("\n")
}
