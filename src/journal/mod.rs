//! Journal entries and keyword sentiment

pub mod models;
pub mod sentiment;

pub use models::*;
pub use sentiment::{analyze_sentiment, SentimentLexicon};
