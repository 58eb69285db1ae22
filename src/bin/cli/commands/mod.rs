pub mod analyze;
pub mod export;
pub mod goals;
pub mod journal;
pub mod log;
pub mod patterns;
pub mod stats;
