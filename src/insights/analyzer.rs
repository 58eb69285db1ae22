//! Composes series statistics, sentiment, forecast and score into one summary

use chrono::Utc;

use crate::config::AnalyticsConfig;
use crate::journal::{analyze_sentiment, JournalRecord, SentimentLexicon};
use crate::mood::{analyze_series, MoodAnalysis, MoodRecord};
use crate::profile::UserProfile;

use super::errors::{AnalysisError, Result};
use super::forecast::forecast;
use super::models::WellnessSummary;
use super::recommendations::recommend;
use super::scorer::score_breakdown;

/// Stateless analysis entry point. Holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lexicon: SentimentLexicon,
}

impl Analyzer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.sentiment.clone())
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Analyze a data snapshot.
    ///
    /// `journal_count` and `mood_entry_count` are the user's totals, which may
    /// exceed the records passed in when only a window is analyzed.
    pub fn analyze(
        &self,
        mood_records: &[MoodRecord],
        journal_records: &[JournalRecord],
        journal_count: usize,
        mood_entry_count: usize,
    ) -> Result<WellnessSummary> {
        if mood_records.is_empty() {
            return Err(AnalysisError::InsufficientData(
                "mood entries are required for analysis".to_string(),
            ));
        }

        let mood_analysis = analyze_series(mood_records);
        let recommendations = recommend(
            mood_analysis.average_level,
            mood_analysis.volatility_score,
            journal_count,
        );
        let forecast = forecast(mood_records);
        let wellness_score = score_breakdown(
            mood_analysis.average_level,
            mood_analysis.volatility_score,
            mood_entry_count,
            journal_count,
        )
        .total;
        let sentiment = analyze_sentiment(journal_records, &self.lexicon);
        let summary = summary_text(&mood_analysis, wellness_score, mood_entry_count, journal_count);

        log::debug!(
            "Analyzed {} mood records: score {:.1}, {} recommendations",
            mood_records.len(),
            wellness_score,
            recommendations.len()
        );

        Ok(WellnessSummary {
            mood_analysis,
            recommendations,
            forecast,
            sentiment,
            summary,
            wellness_score,
            analysis_timestamp: Utc::now(),
        })
    }

    /// Analyze everything stored in a profile
    pub fn analyze_profile(&self, profile: &UserProfile) -> Result<WellnessSummary> {
        self.analyze(
            &profile.mood_entries,
            &profile.journal_entries,
            profile.journal_entries.len(),
            profile.mood_entries.len(),
        )
    }
}

/// Analyze with the default lexicon
pub fn analyze(
    mood_records: &[MoodRecord],
    journal_records: &[JournalRecord],
    journal_count: usize,
    mood_entry_count: usize,
) -> Result<WellnessSummary> {
    Analyzer::default().analyze(mood_records, journal_records, journal_count, mood_entry_count)
}

fn summary_text(
    analysis: &MoodAnalysis,
    wellness_score: f64,
    mood_entry_count: usize,
    journal_count: usize,
) -> String {
    format!(
        "Wellness score {:.1}/100. Average mood {:.1}/5 with volatility {:.1}. \
         Based on {} mood entries and {} journal entries.",
        wellness_score,
        analysis.average_level,
        analysis.volatility_score,
        mood_entry_count,
        journal_count
    )
}
