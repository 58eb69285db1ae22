//! Mood tracking module

pub mod models;
pub mod series;

pub use models::*;
pub use series::analyze_series;
