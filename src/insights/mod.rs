//! Wellness insights built on the mood and journal analytics

pub mod analyzer;
pub mod errors;
pub mod forecast;
pub mod models;
pub mod narrative;
pub mod recommendations;
pub mod scorer;

pub use analyzer::{analyze, Analyzer};
pub use errors::AnalysisError;
pub use forecast::forecast;
pub use models::*;
pub use scorer::{score_breakdown, wellness_score};
