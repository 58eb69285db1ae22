//! Export document format
//!
//! Field names follow the exchange format consumed by other tools, so the
//! document types mirror it instead of reusing the internal models.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::insights::{Priority, RecommendationKind, TrendKind, WellnessSummary};
use crate::journal::JournalRecord;
use crate::mood::MoodRecord;
use crate::profile::UserProfile;

pub const EXPORT_VERSION: &str = "1.0";
pub const EXPORT_SOURCE: &str = "Mood Journal";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub metadata: ExportMetadata,
    pub user_profile: ExportedProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<ExportedAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_timestamp: DateTime<Utc>,
    pub version: String,
    pub source: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedProfile {
    pub user_id: String,
    pub average_mood_last_7_days: f64,
    pub average_mood_last_30_days: f64,
    pub total_entries_count: usize,
    pub streak_days: u32,
    pub mood_entries: Vec<ExportedMoodEntry>,
    pub journal_entries: Vec<ExportedJournalEntry>,
    pub goals: Vec<String>,
    pub reminders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedMoodEntry {
    pub date: NaiveDate,
    pub mood_level: u8,
    /// Empty when the entry has no note
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedJournalEntry {
    pub date: NaiveDate,
    pub content: String,
    /// 0.0 when no score was assigned
    #[serde(default)]
    pub sentiment_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedAnalysis {
    pub analysis_timestamp: DateTime<Utc>,
    pub overall_wellness_score: f64,
    pub summary: String,
    pub mood_analysis: ExportedMoodAnalysis,
    pub recommendations: Vec<ExportedRecommendation>,
    pub prediction: ExportedPrediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedMoodAnalysis {
    pub average_mood: f64,
    pub trend_slope: f64,
    pub volatility_score: f64,
    /// Number of level transitions
    pub mood_variance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPrediction {
    pub predicted_mood: f64,
    pub confidence: f64,
    pub timeframe: String,
    pub trend: TrendKind,
}

impl From<&WellnessSummary> for ExportedAnalysis {
    fn from(summary: &WellnessSummary) -> Self {
        let analysis = &summary.mood_analysis;
        Self {
            analysis_timestamp: summary.analysis_timestamp,
            overall_wellness_score: summary.wellness_score,
            summary: summary.summary.clone(),
            mood_analysis: ExportedMoodAnalysis {
                average_mood: analysis.average_level,
                trend_slope: analysis.trend_slope,
                volatility_score: analysis.volatility_score,
                mood_variance: analysis.transition_count,
            },
            recommendations: summary
                .recommendations
                .iter()
                .map(|r| ExportedRecommendation {
                    kind: r.kind,
                    title: r.title.clone(),
                    description: r.description.clone(),
                    priority: r.priority,
                })
                .collect(),
            prediction: ExportedPrediction {
                predicted_mood: summary.forecast.predicted_level,
                confidence: summary.forecast.confidence,
                timeframe: summary.forecast.horizon_label.clone(),
                trend: summary.forecast.trend_kind,
            },
        }
    }
}

impl ExportDocument {
    /// Build a document for `profile`, with statistics relative to `today`
    pub fn new(
        profile: &UserProfile,
        today: NaiveDate,
        summary: Option<&WellnessSummary>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        let stats = profile.stats(today);

        Self {
            metadata: ExportMetadata {
                export_timestamp: exported_at,
                version: EXPORT_VERSION.to_string(),
                source: EXPORT_SOURCE.to_string(),
                user_id: profile.user_id.clone(),
            },
            user_profile: ExportedProfile {
                user_id: profile.user_id.clone(),
                average_mood_last_7_days: stats.average_mood_last_7_days,
                average_mood_last_30_days: stats.average_mood_last_30_days,
                total_entries_count: stats.total_entries_count,
                streak_days: stats.streak_days,
                mood_entries: profile
                    .mood_entries
                    .iter()
                    .map(|e| ExportedMoodEntry {
                        date: e.date,
                        mood_level: e.level(),
                        note: e.note.clone().unwrap_or_default(),
                    })
                    .collect(),
                journal_entries: profile
                    .journal_entries
                    .iter()
                    .map(|e| ExportedJournalEntry {
                        date: e.date,
                        content: e.text.clone(),
                        sentiment_score: e.sentiment().unwrap_or(0.0),
                    })
                    .collect(),
                goals: profile.goals.clone(),
                reminders: profile.reminders.clone(),
            },
            ai_analysis: summary.map(ExportedAnalysis::from),
        }
    }

    /// Rebuild the stored profile from an exported document.
    ///
    /// Unscored journal entries are exported as `0.0`, so a score of exactly
    /// `0.0` is read back as unscored.
    pub fn to_user_profile(&self) -> UserProfile {
        let exported = &self.user_profile;
        let mut profile = UserProfile::new(exported.user_id.clone());

        for entry in &exported.mood_entries {
            let note = Some(entry.note.clone()).filter(|n| !n.is_empty());
            profile.save_mood_entry(MoodRecord::new(entry.date, entry.mood_level as i64, note));
        }
        for entry in &exported.journal_entries {
            let mut record = JournalRecord::new(entry.date, entry.content.clone());
            if entry.sentiment_score != 0.0 {
                record.set_sentiment(entry.sentiment_score);
            }
            profile.save_journal_entry(record);
        }
        profile.goals = exported.goals.clone();
        profile.reminders = exported.reminders.clone();
        profile
    }
}

pub fn to_json_string(document: &ExportDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn parse_export(json: &str) -> Result<ExportDocument> {
    Ok(serde_json::from_str(json)?)
}

pub fn write_export(path: &Path, document: &ExportDocument) -> Result<()> {
    fs::write(path, to_json_string(document)?)?;
    log::info!("Exported profile {} to {}", document.metadata.user_id, path.display());
    Ok(())
}

pub fn read_export(path: &Path) -> Result<ExportDocument> {
    let content = fs::read_to_string(path)?;
    parse_export(&content)
}
