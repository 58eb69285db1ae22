//! Journal data models

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

fn clamp_sentiment(score: f64) -> f64 {
    score.clamp(-1.0, 1.0)
}

fn deserialize_sentiment<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(clamp_sentiment))
}

/// A free-text journal entry for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecord {
    pub date: NaiveDate,
    pub text: String,
    /// Sentiment score in [-1, 1], if one was assigned
    #[serde(default, deserialize_with = "deserialize_sentiment")]
    sentiment: Option<f64>,
}

impl JournalRecord {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
            sentiment: None,
        }
    }

    pub fn with_sentiment(mut self, score: f64) -> Self {
        self.set_sentiment(score);
        self
    }

    pub fn sentiment(&self) -> Option<f64> {
        self.sentiment
    }

    pub fn set_sentiment(&mut self, score: f64) {
        self.sentiment = Some(clamp_sentiment(score));
    }
}

/// Overall tone of a set of journal entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SentimentClass {
    MostlyPositive,
    NegativeTrend,
    Balanced,
    /// No entries to classify
    NoData,
}

impl SentimentClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MostlyPositive => "mostly positive",
            Self::NegativeTrend => "negative trend",
            Self::Balanced => "balanced",
            Self::NoData => "no data",
        }
    }
}

/// Keyword sentiment over a set of journal entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub total_entries: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub classification: SentimentClass,
}

impl SentimentReport {
    /// Sentinel for an empty journal
    pub fn no_data() -> Self {
        Self {
            total_entries: 0,
            positive_count: 0,
            negative_count: 0,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            classification: SentimentClass::NoData,
        }
    }
}
