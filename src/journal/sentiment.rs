//! Keyword-list sentiment scoring
//!
//! An entry counts as positive when its lower-cased text contains any word
//! from the positive list, and independently as negative when it contains
//! any word from the negative list. One entry may count toward both.

use serde::{Deserialize, Serialize};

use super::models::{JournalRecord, SentimentClass, SentimentReport};

/// Ratio gap required before one side dominates
const DOMINANCE_MARGIN: f64 = 0.2;

const DEFAULT_POSITIVE: [&str; 7] = [
    "heureux",
    "joie",
    "bien",
    "formidable",
    "excellent",
    "réussi",
    "motivation",
];

const DEFAULT_NEGATIVE: [&str; 7] = [
    "triste",
    "stress",
    "difficile",
    "problème",
    "fatigue",
    "inquiet",
    "anxieux",
];

#[derive(Deserialize)]
struct RawLexicon {
    #[serde(default)]
    positive: Option<Vec<String>>,
    #[serde(default)]
    negative: Option<Vec<String>>,
}

impl From<RawLexicon> for SentimentLexicon {
    fn from(raw: RawLexicon) -> Self {
        let defaults = SentimentLexicon::default();
        Self::new(
            raw.positive.unwrap_or(defaults.positive),
            raw.negative.unwrap_or(defaults.negative),
        )
    }
}

/// Positive and negative keyword lists, stored lower-cased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLexicon")]
pub struct SentimentLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE.iter().map(|w| w.to_string()).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl SentimentLexicon {
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        let normalize = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    fn is_positive(&self, lowered: &str) -> bool {
        self.positive.iter().any(|w| lowered.contains(w.as_str()))
    }

    fn is_negative(&self, lowered: &str) -> bool {
        self.negative.iter().any(|w| lowered.contains(w.as_str()))
    }
}

/// Classify ratios into an overall tone
pub fn classify(positive_ratio: f64, negative_ratio: f64) -> SentimentClass {
    if positive_ratio > negative_ratio + DOMINANCE_MARGIN {
        SentimentClass::MostlyPositive
    } else if negative_ratio > positive_ratio + DOMINANCE_MARGIN {
        SentimentClass::NegativeTrend
    } else {
        SentimentClass::Balanced
    }
}

/// Score a set of journal entries against a lexicon
pub fn analyze_sentiment(entries: &[JournalRecord], lexicon: &SentimentLexicon) -> SentimentReport {
    if entries.is_empty() {
        return SentimentReport::no_data();
    }

    let mut positive_count = 0;
    let mut negative_count = 0;

    for entry in entries {
        let lowered = entry.text.to_lowercase();
        if lexicon.is_positive(&lowered) {
            positive_count += 1;
        }
        if lexicon.is_negative(&lowered) {
            negative_count += 1;
        }
    }

    let total = entries.len();
    let positive_ratio = positive_count as f64 / total as f64;
    let negative_ratio = negative_count as f64 / total as f64;

    SentimentReport {
        total_entries: total,
        positive_count,
        negative_count,
        positive_ratio,
        negative_ratio,
        classification: classify(positive_ratio, negative_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entries(texts: &[&str]) -> Vec<JournalRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        texts.iter().map(|t| JournalRecord::new(date, *t)).collect()
    }

    #[test]
    fn test_empty_is_no_data() {
        let report = analyze_sentiment(&[], &SentimentLexicon::default());
        assert_eq!(report.classification, SentimentClass::NoData);
        assert_eq!(report.total_entries, 0);
    }

    #[test]
    fn test_mostly_positive() {
        let report = analyze_sentiment(
            &entries(&["Une JOIE immense", "Tout va bien", "Rien de spécial"]),
            &SentimentLexicon::default(),
        );
        assert_eq!(report.positive_count, 2);
        assert_eq!(report.negative_count, 0);
        assert_eq!(report.classification, SentimentClass::MostlyPositive);
    }

    #[test]
    fn test_negative_trend() {
        let report = analyze_sentiment(
            &entries(&["Beaucoup de stress", "Journée difficile", "Un problème"]),
            &SentimentLexicon::default(),
        );
        assert_eq!(report.negative_count, 3);
        assert!((report.negative_ratio - 1.0).abs() < 1e-12);
        assert_eq!(report.classification, SentimentClass::NegativeTrend);
    }

    #[test]
    fn test_entry_counts_toward_both_lists() {
        let report = analyze_sentiment(
            &entries(&["Heureux malgré la fatigue"]),
            &SentimentLexicon::default(),
        );
        assert_eq!(report.positive_count, 1);
        assert_eq!(report.negative_count, 1);
        assert_eq!(report.classification, SentimentClass::Balanced);
    }

    #[test]
    fn test_multiple_matches_count_once() {
        let report = analyze_sentiment(
            &entries(&["joie, joie, excellent, formidable"]),
            &SentimentLexicon::default(),
        );
        assert_eq!(report.positive_count, 1);
    }

    #[test]
    fn test_custom_lexicon_is_lowercased() {
        let lexicon = SentimentLexicon::new(
            vec!["Happy".to_string(), "  ".to_string()],
            vec!["SAD".to_string()],
        );
        assert_eq!(lexicon.positive(), ["happy".to_string()]);

        let report = analyze_sentiment(&entries(&["so happy today", "a sad day", "meh"]), &lexicon);
        assert_eq!(report.positive_count, 1);
        assert_eq!(report.negative_count, 1);
        assert_eq!(report.classification, SentimentClass::Balanced);
    }

    #[test]
    fn test_partial_lexicon_keeps_defaults() {
        let lexicon: SentimentLexicon =
            serde_json::from_str(r#"{"positive":["Calm"]}"#).unwrap();
        assert_eq!(lexicon.positive(), ["calm".to_string()]);
        assert_eq!(lexicon.negative(), SentimentLexicon::default().negative());
    }
}
