//! Insight result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::SentimentReport;
use crate::mood::MoodAnalysis;

/// Area a recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Activity,
    Mindfulness,
    Social,
    Professional,
    Lifestyle,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Mindfulness => "mindfulness",
            Self::Social => "social",
            Self::Professional => "professional",
            Self::Lifestyle => "lifestyle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A canned, prioritized suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, title: &str, description: &str, priority: Priority) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            priority,
        }
    }
}

/// Direction of the fitted mood trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    Improving,
    Declining,
    Stable,
}

impl TrendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Short-horizon mood forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Predicted level, clamped to 1-5
    pub predicted_level: f64,
    /// Confidence in 0-1
    pub confidence: f64,
    pub horizon_label: String,
    pub trend_kind: TrendKind,
}

/// Weighted components of the composite wellness score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessBreakdown {
    /// Mood level, out of 40
    pub mood: f64,
    /// Low volatility, out of 30
    pub consistency: f64,
    /// Mood logging activity, out of 20
    pub engagement: f64,
    /// Journaling activity, out of 10
    pub journal: f64,
    /// Sum of the components, bounded to 0-100
    pub total: f64,
}

/// Full result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    pub mood_analysis: MoodAnalysis,
    pub recommendations: Vec<Recommendation>,
    pub forecast: ForecastResult,
    pub sentiment: SentimentReport,
    pub summary: String,
    /// Composite score in 0-100
    pub wellness_score: f64,
    /// Informational only; not part of the analytical result
    pub analysis_timestamp: DateTime<Utc>,
}
