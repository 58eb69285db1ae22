pub mod config;
pub mod export;
pub mod insights;
pub mod journal;
pub mod mood;
pub mod profile;

pub use config::AnalyticsConfig;
pub use insights::{analyze, AnalysisError, Analyzer, WellnessSummary};
pub use journal::{JournalRecord, SentimentLexicon};
pub use mood::{MoodAnalysis, MoodRecord};
pub use profile::{ProfileRepository, ProfileStorage, UserProfile};
